use super::*;

#[test]
fn validate_passes_values_through_as_typed() {
    let (email, password) = validate_login_input("  a@x.com ", " pw ").unwrap();
    assert_eq!(email, "  a@x.com ");
    assert_eq!(password, " pw ");
}

#[test]
fn validate_rejects_blank_email() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Email is required"));
}

#[test]
fn validate_rejects_empty_password() {
    assert_eq!(validate_login_input("a@x.com", ""), Err("Password is required"));
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(true), "Authenticating...");
    assert_eq!(submit_label(false), "Login");
}
