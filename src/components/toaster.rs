//! Renders the notification queue.

use leptos::prelude::*;

use crate::state::toast::{Notifier, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let toasts = notifier.toasts();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        view! {
                            <div class=class role="status">
                                <div class="toast__title">{toast.title}</div>
                                {toast.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                                <button class="toast__close" on:click=move |_| notifier.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
