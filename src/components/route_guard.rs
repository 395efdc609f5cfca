//! Route wrappers that gate pages on session state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::session::SessionContext;
use crate::util::guard::{self, GuardOutcome};

/// Full-screen placeholder shown while the persisted session is read.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__label">"Loading..."</div>
        </div>
    }
}

fn render(outcome: GuardOutcome, children: Option<&ChildrenFn>) -> AnyView {
    match (outcome, children) {
        (GuardOutcome::Redirect(route), _) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=route.path() options=options/> }.into_any()
        }
        (GuardOutcome::Render, Some(children)) => children().into_any(),
        _ => view! { <LoadingScreen/> }.into_any(),
    }
}

/// Renders `children` only for signed-in users; guests go to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let outcome = Memo::new(move |_| guard::protected(&session.state()));
    move || render(outcome.get(), Some(&children))
}

/// Renders `children` only for guests; signed-in users go to `/dashboard`.
#[component]
pub fn GuestRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let outcome = Memo::new(move |_| guard::guest_only(&session.state()));
    move || render(outcome.get(), Some(&children))
}

/// Forwards `/` to the dashboard or the login page.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let outcome = Memo::new(move |_| guard::root(&session.state()));
    move || render(outcome.get(), None)
}
