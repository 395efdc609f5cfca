use super::*;
use crate::types::{IndustryType, Session};
use time::macros::datetime;

fn signed_in() -> SessionState {
    SessionState::Authenticated(Session {
        uid: "user_1".to_owned(),
        full_name: "Alice".to_owned(),
        company_name: "Acme".to_owned(),
        registration_number: "R1".to_owned(),
        industry_type: IndustryType::Warehouse,
        email: "a@x.com".to_owned(),
        phone: "555".to_owned(),
        created_at: datetime!(2025-01-01 0:00 UTC),
    })
}

// =============================================================
// protected
// =============================================================

#[test]
fn protected_waits_while_initializing() {
    assert_eq!(protected(&SessionState::Initializing), GuardOutcome::Loading);
}

#[test]
fn protected_redirects_unauth_to_login() {
    assert_eq!(protected(&SessionState::Unauthenticated), GuardOutcome::Redirect(AppRoute::Login));
}

#[test]
fn protected_renders_when_signed_in() {
    assert_eq!(protected(&signed_in()), GuardOutcome::Render);
}

// =============================================================
// guest_only
// =============================================================

#[test]
fn guest_only_waits_while_initializing() {
    assert_eq!(guest_only(&SessionState::Initializing), GuardOutcome::Loading);
}

#[test]
fn guest_only_redirects_signed_in_to_dashboard() {
    assert_eq!(guest_only(&signed_in()), GuardOutcome::Redirect(AppRoute::Dashboard));
}

#[test]
fn guest_only_renders_for_guests() {
    assert_eq!(guest_only(&SessionState::Unauthenticated), GuardOutcome::Render);
}

// =============================================================
// root
// =============================================================

#[test]
fn root_forwards_by_session() {
    assert_eq!(root(&SessionState::Initializing), GuardOutcome::Loading);
    assert_eq!(root(&SessionState::Unauthenticated), GuardOutcome::Redirect(AppRoute::Login));
    assert_eq!(root(&signed_in()), GuardOutcome::Redirect(AppRoute::Dashboard));
}

#[test]
fn route_paths() {
    assert_eq!(AppRoute::Root.path(), "/");
    assert_eq!(AppRoute::Login.path(), "/login");
    assert_eq!(AppRoute::Signup.path(), "/signup");
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
}
