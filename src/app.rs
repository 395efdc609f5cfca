//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{GuestRoute, ProtectedRoute, RootRedirect};
use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::SessionContext;
use crate::state::toast::Notifier;

/// Root application component.
///
/// Builds the session context from `config`, restores any persisted session
/// once mounted, and sets up client-side routing.
#[component]
pub fn App(#[prop(optional)] config: Option<AppConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let session = SessionContext::from_config(&config);
    let notifier = Notifier::new(config.toast_duration);

    provide_context(session);
    provide_context(notifier);
    provide_context(config);

    // Leave the loading state on first run.
    Effect::new(move || session.restore());

    view! {
        <Title text="Company Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestRoute><LoginPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <GuestRoute><SignupPage/></GuestRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
        <Toaster/>
    }
}
