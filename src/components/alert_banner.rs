//! Stack of active hazard alerts with per-kind dismiss buttons.

use leptos::prelude::*;

use crate::state::alerts::{Alert, AlertKind};

#[component]
pub fn AlertBanner(alerts: Signal<Vec<Alert>>, on_dismiss: Callback<AlertKind>) -> impl IntoView {
    view! {
        <Show when=move || !alerts.get().is_empty()>
            <div class="alert-banner">
                {move || {
                    alerts
                        .get()
                        .into_iter()
                        .map(|alert| {
                            let kind = alert.kind;
                            view! {
                                <div class=format!("alert-banner__item {}", kind.css_class())>
                                    <div class="alert-banner__text">
                                        <h3 class="alert-banner__title">{alert.title}</h3>
                                        <p class="alert-banner__message">{alert.message}</p>
                                    </div>
                                    <button
                                        class="alert-banner__dismiss"
                                        title="Dismiss"
                                        on:click=move |_| on_dismiss.run(kind)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
