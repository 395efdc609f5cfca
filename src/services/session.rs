//! Local sign-up / sign-in service over the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never touch storage directly. They call the provider (through the
//! reactive `SessionContext`), which validates against the stored user list,
//! persists the resulting session, and moves the state machine:
//!
//! ```text
//! Initializing --restore--> Authenticated(session) | Unauthenticated
//! any --signup/login ok--> Authenticated(session)
//! any --logout--> Unauthenticated
//! ```
//!
//! Failed operations leave the state exactly as it was.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use time::OffsetDateTime;

use crate::store::kv::{KeyValueStore, StorageError};
use crate::store::session_store::SessionStore;
use crate::types::{NewUser, Session, User};

/// Where the current browser user stands with respect to sign-in.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Persisted session not yet read.
    #[default]
    Initializing,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Session is no longer available")]
    Disposed,
}

impl From<StorageError> for AuthError {
    fn from(e: StorageError) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}

/// Owns the session store and the current authentication state.
pub struct SessionProvider<S> {
    store: SessionStore<S>,
    state: SessionState,
}

impl<S: KeyValueStore> SessionProvider<S> {
    /// A provider in the `Initializing` state. Call [`Self::restore`] next.
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store, state: SessionState::Initializing }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Adopt any persisted session. One read, no retry.
    pub fn restore(&mut self) -> &SessionState {
        self.state = match self.store.load_session() {
            Some(session) => {
                log::info!("restored session for {}", session.email);
                SessionState::Authenticated(session)
            }
            None => SessionState::Unauthenticated,
        };
        &self.state
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// - [`AuthError::DuplicateEmail`] if the email is already registered.
    /// - [`AuthError::StorageUnavailable`] if persisting the account or the
    ///   session fails.
    pub fn signup(&mut self, new_user: NewUser) -> Result<Session, AuthError> {
        let mut users = self.store.load_users();
        if users.iter().any(|u| u.email == new_user.email) {
            log::info!("signup rejected: {} already registered", new_user.email);
            return Err(AuthError::DuplicateEmail);
        }

        let user = User::register(new_user, OffsetDateTime::now_utc());
        let session = user.to_session();
        users.push(user);
        self.store.save_users(&users)?;

        // The account is only kept if its session was written too.
        self.adopt(session).inspect_err(|e| {
            users.pop();
            match self.store.save_users(&users) {
                Ok(()) => log::warn!("signup rolled back: {e}"),
                Err(rollback) => log::warn!("signup rollback failed after '{e}': {rollback}"),
            }
        })
    }

    /// Sign in with an exact email and password match.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] if no stored user matches both.
    /// - [`AuthError::StorageUnavailable`] if persisting the session fails.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self
            .store
            .load_users()
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .map(User::to_session)
            .ok_or_else(|| {
                log::info!("login rejected for {email}");
                AuthError::InvalidCredentials
            })?;

        self.adopt(session)
    }

    /// Forget the current session, persisted and in memory. Always succeeds.
    pub fn logout(&mut self) {
        self.store.clear_session();
        self.state = SessionState::Unauthenticated;
        log::info!("signed out");
    }

    fn adopt(&mut self, session: Session) -> Result<Session, AuthError> {
        self.store.save_session(&session)?;
        log::info!("signed in as {}", session.email);
        self.state = SessionState::Authenticated(session.clone());
        Ok(session)
    }
}
