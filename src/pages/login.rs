//! Login page: email and password against the local account list.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionContext;
use crate::state::toast::Notifier;
use crate::util::guard::AppRoute;

/// Check the form before submitting. Whitespace-only email counts as
/// missing, but both values are passed on as typed since stored accounts
/// are matched exactly.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Authenticating..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Ok((email, password)) = validate_login_input(&email.get_untracked(), &password.get_untracked()) else {
            return;
        };

        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session.login(email, password).await;
            busy.try_set(false);
            match result {
                Ok(_) => {
                    notifier.success("Login successful!");
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => notifier.failure("Login failed", e.to_string()),
            }
        });
    };

    view! {
        <Title text="Login - Company Portal"/>
        <div class="cyberpunk-bg auth-page">
            <div class="cyber-card auth-page__card">
                <h2 class="auth-page__title">"Admin Login"</h2>
                <div class="auth-page__rule"></div>

                <form class="auth-page__form" on:submit=on_submit>
                    <div class="cyber-input-group">
                        <input
                            class="cyber-input"
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="cyber-input-group">
                        <input
                            class="cyber-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="cyber-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>

                <div class="auth-page__footer">
                    <p>
                        "Don't have an account? "
                        <A href=AppRoute::Signup.path() attr:class="auth-page__link">
                            "Sign Up"
                        </A>
                    </p>
                </div>
            </div>
        </div>
    }
}
