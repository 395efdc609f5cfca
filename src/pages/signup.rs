//! Account registration page.
//!
//! DESIGN
//! ======
//! Validation is a pure function over `SignupForm` so the rules are tested
//! without a DOM. Every failing field reports at once; the form keeps its
//! contents after a failed submit.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::state::toast::Notifier;
use crate::types::{IndustryType, NewUser};
use crate::util::guard::AppRoute;

/// Raw form contents as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub company_name: String,
    pub registration_number: String,
    /// Selected `IndustryType` label, empty until chosen.
    pub industry_type: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    FullName,
    CompanyName,
    RegistrationNumber,
    IndustryType,
    Email,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<SignupField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: SignupField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn require(&mut self, field: SignupField, ok: bool, message: &'static str) {
        if !ok {
            self.0.insert(field, message);
        }
    }
}

impl SignupForm {
    /// Build signup input, or report every invalid field.
    ///
    /// # Errors
    ///
    /// Returns the message for each field that failed its rule.
    pub fn validate(&self) -> Result<NewUser, FieldErrors> {
        let mut errors = FieldErrors::default();
        let industry = IndustryType::from_label(self.industry_type.trim());

        errors.require(SignupField::FullName, !self.full_name.trim().is_empty(), "Full name is required");
        errors.require(SignupField::CompanyName, !self.company_name.trim().is_empty(), "Company name is required");
        errors.require(
            SignupField::RegistrationNumber,
            !self.registration_number.trim().is_empty(),
            "Registration number is required",
        );
        errors.require(SignupField::IndustryType, industry.is_some(), "Industry type is required");
        errors.require(SignupField::Email, !self.email.trim().is_empty(), "Email is required");
        errors.require(SignupField::Password, !self.password.is_empty(), "Password is required");
        errors.require(SignupField::ConfirmPassword, self.password == self.confirm_password, "Passwords do not match");

        match industry {
            Some(industry_type) if errors.is_empty() => Ok(NewUser {
                full_name: self.full_name.trim().to_owned(),
                company_name: self.company_name.trim().to_owned(),
                registration_number: self.registration_number.trim().to_owned(),
                industry_type,
                email: self.email.clone(),
                phone: self.phone.trim().to_owned(),
                password: self.password.clone(),
            }),
            _ => Err(errors),
        }
    }
}

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let new_user = match form.with_untracked(SignupForm::validate) {
            Ok(new_user) => {
                errors.set(FieldErrors::default());
                new_user
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.signup(new_user).await;
            busy.try_set(false);
            match result {
                Ok(_) => {
                    notifier.success("Account created successfully!");
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => notifier.failure("Signup failed", e.to_string()),
            }
        });
    };

    view! {
        <Title text="Sign Up - Company Portal"/>
        <div class="cyberpunk-bg auth-page">
            <div class="cyber-card auth-page__card">
                <h2 class="auth-page__title">"Sign Up"</h2>

                <form class="auth-page__form" on:submit=on_submit>
                    <TextField form=form errors=errors field=SignupField::FullName placeholder="Full Name" input_type="text"
                        get=|f| f.full_name.clone() set=|f, v| f.full_name = v/>
                    <TextField form=form errors=errors field=SignupField::CompanyName placeholder="Company Name" input_type="text"
                        get=|f| f.company_name.clone() set=|f, v| f.company_name = v/>
                    <TextField form=form errors=errors field=SignupField::RegistrationNumber placeholder="Registration Number"
                        input_type="text" get=|f| f.registration_number.clone() set=|f, v| f.registration_number = v/>

                    <div class="cyber-input-group">
                        <select
                            class="cyber-input"
                            prop:value=move || form.with(|f| f.industry_type.clone())
                            on:change=move |ev| form.update(|f| f.industry_type = event_target_value(&ev))
                        >
                            <option value="">"Select Industry Type"</option>
                            {IndustryType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.label()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                        <FieldError errors=errors field=SignupField::IndustryType/>
                    </div>

                    <TextField form=form errors=errors field=SignupField::Email placeholder="Email Address" input_type="email"
                        get=|f| f.email.clone() set=|f, v| f.email = v/>
                    <div class="cyber-input-group">
                        <input
                            class="cyber-input"
                            type="tel"
                            placeholder="Phone Number"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                    <TextField form=form errors=errors field=SignupField::Password placeholder="Password" input_type="password"
                        get=|f| f.password.clone() set=|f, v| f.password = v/>
                    <TextField form=form errors=errors field=SignupField::ConfirmPassword placeholder="Confirm Password"
                        input_type="password" get=|f| f.confirm_password.clone() set=|f, v| f.confirm_password = v/>

                    <button class="cyber-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>

                <div class="auth-page__footer">
                    <p>
                        "Already have an account? "
                        <A href=AppRoute::Login.path() attr:class="auth-page__link">
                            "Login"
                        </A>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Input bound to one `SignupForm` field, with its validation message.
#[component]
fn TextField(
    form: RwSignal<SignupForm>,
    errors: RwSignal<FieldErrors>,
    field: SignupField,
    placeholder: &'static str,
    input_type: &'static str,
    get: fn(&SignupForm) -> String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <div class="cyber-input-group">
            <input
                class="cyber-input"
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
            <FieldError errors=errors field=field/>
        </div>
    }
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: SignupField) -> impl IntoView {
    move || errors.with(|e| e.get(field)).map(|message| view! { <p class="field-error">{message}</p> })
}
