//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. `SessionContext` is created
//! once in `App` and handed to views through Leptos context; nothing reads
//! session state from a global.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::session::{AuthError, SessionProvider};
use crate::store::kv::{KeyValueStore, open_default};
use crate::store::session_store::SessionStore;
use crate::types::{NewUser, Session};

pub use crate::services::session::SessionState;

type BoxedProvider = SessionProvider<Box<dyn KeyValueStore>>;

/// Reactive handle over the session provider.
///
/// Operations run against the provider and then publish its state to a
/// signal, so guards and views re-render on every transition.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    provider: StoredValue<BoxedProvider, LocalStorage>,
    latency: Duration,
}

impl SessionContext {
    pub fn new(provider: BoxedProvider, latency: Duration) -> Self {
        let state = RwSignal::new(provider.state().clone());
        Self { state, provider: StoredValue::new_local(provider), latency }
    }

    /// Context over the best available storage, keyed and timed per `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = SessionStore::with_keys(open_default(), &config.users_key, &config.session_key);
        Self::new(SessionProvider::new(store), config.auth_latency)
    }

    /// Tracked read of the current state.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Leave `Initializing` by reading the persisted session.
    pub fn restore(&self) {
        self.provider.update_value(|p| {
            p.restore();
        });
        self.publish();
    }

    /// Register and sign in after the configured latency.
    ///
    /// # Errors
    ///
    /// See [`SessionProvider::signup`]; [`AuthError::Disposed`] if the
    /// owning view tree was torn down mid-flight.
    pub async fn signup(self, new_user: NewUser) -> Result<Session, AuthError> {
        simulate_latency(self.latency).await;
        let result = self
            .provider
            .try_update_value(|p| p.signup(new_user))
            .unwrap_or(Err(AuthError::Disposed));
        self.publish();
        result
    }

    /// Sign in after the configured latency.
    ///
    /// # Errors
    ///
    /// See [`SessionProvider::login`]; [`AuthError::Disposed`] if the owning
    /// view tree was torn down mid-flight.
    pub async fn login(self, email: String, password: String) -> Result<Session, AuthError> {
        simulate_latency(self.latency).await;
        let result = self
            .provider
            .try_update_value(|p| p.login(&email, &password))
            .unwrap_or(Err(AuthError::Disposed));
        self.publish();
        result
    }

    /// Sign out immediately.
    pub fn logout(&self) {
        self.provider.update_value(SessionProvider::logout);
        self.publish();
    }

    fn publish(&self) {
        if let Some(next) = self.provider.try_with_value(|p| p.state().clone()) {
            self.state.set(next);
        }
    }
}

async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
    }
}
