use super::*;

fn filled() -> SignupForm {
    SignupForm {
        full_name: "Alice Smith".to_owned(),
        company_name: "Acme".to_owned(),
        registration_number: "REG-1".to_owned(),
        industry_type: "Chemical".to_owned(),
        email: "alice@acme.com".to_owned(),
        phone: String::new(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_form_produces_new_user() {
    let new_user = filled().validate().unwrap();
    assert_eq!(new_user.full_name, "Alice Smith");
    assert_eq!(new_user.industry_type, IndustryType::Chemical);
    assert_eq!(new_user.phone, "");
}

#[test]
fn names_are_trimmed_but_email_and_password_are_not() {
    let form = SignupForm {
        full_name: "  Alice ".to_owned(),
        email: " alice@acme.com ".to_owned(),
        password: " pw ".to_owned(),
        confirm_password: " pw ".to_owned(),
        ..filled()
    };
    let new_user = form.validate().unwrap();
    assert_eq!(new_user.full_name, "Alice");
    assert_eq!(new_user.email, " alice@acme.com ");
    assert_eq!(new_user.password, " pw ");
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = SignupForm::default().validate().unwrap_err();
    assert_eq!(errors.get(SignupField::FullName), Some("Full name is required"));
    assert_eq!(errors.get(SignupField::CompanyName), Some("Company name is required"));
    assert_eq!(errors.get(SignupField::RegistrationNumber), Some("Registration number is required"));
    assert_eq!(errors.get(SignupField::IndustryType), Some("Industry type is required"));
    assert_eq!(errors.get(SignupField::Email), Some("Email is required"));
    assert_eq!(errors.get(SignupField::Password), Some("Password is required"));
    // Both passwords empty, so they match.
    assert_eq!(errors.get(SignupField::ConfirmPassword), None);
    assert_eq!(errors.len(), 6);
}

#[test]
fn whitespace_only_fields_are_missing() {
    let form = SignupForm { company_name: "   ".to_owned(), ..filled() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(SignupField::CompanyName), Some("Company name is required"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = SignupForm { confirm_password: "other".to_owned(), ..filled() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(SignupField::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn unknown_industry_label_is_rejected() {
    let form = SignupForm { industry_type: "Bakery".to_owned(), ..filled() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(SignupField::IndustryType), Some("Industry type is required"));
}

#[test]
fn power_plant_label_parses() {
    let form = SignupForm { industry_type: "Power Plant".to_owned(), ..filled() };
    assert_eq!(form.validate().unwrap().industry_type, IndustryType::PowerPlant);
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(true), "Creating...");
    assert_eq!(submit_label(false), "Sign Up");
}
