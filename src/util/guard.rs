//! Route guard decisions shared by every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. Keeping the
//! decision a pure function of `SessionState` lets it be tested without a
//! router; `components::route_guard` turns the outcome into views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::services::session::SessionState;

/// Client-side routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    Login,
    Signup,
    Dashboard,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// What a guarded route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not yet known; show the loading placeholder.
    Loading,
    Redirect(AppRoute),
    Render,
}

/// Authenticated-only routes.
pub fn protected(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Initializing => GuardOutcome::Loading,
        SessionState::Unauthenticated => GuardOutcome::Redirect(AppRoute::Login),
        SessionState::Authenticated(_) => GuardOutcome::Render,
    }
}

/// Guest-only routes (login, signup).
pub fn guest_only(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Initializing => GuardOutcome::Loading,
        SessionState::Authenticated(_) => GuardOutcome::Redirect(AppRoute::Dashboard),
        SessionState::Unauthenticated => GuardOutcome::Render,
    }
}

/// The bare `/` route always forwards somewhere.
pub fn root(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Initializing => GuardOutcome::Loading,
        SessionState::Authenticated(_) => GuardOutcome::Redirect(AppRoute::Dashboard),
        SessionState::Unauthenticated => GuardOutcome::Redirect(AppRoute::Login),
    }
}
