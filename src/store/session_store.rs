//! Durable persistence of registered users and the current session.
//!
//! Layout: the user list lives under `users` as a JSON array, the session
//! under `currentUser` as a JSON object. Both keys are configurable. Every
//! write replaces the whole value; there is no partial update and no
//! cross-tab coordination.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use super::kv::{KeyValueStore, StorageError, load_json, save_json};
use crate::config::{DEFAULT_SESSION_KEY, DEFAULT_USERS_KEY};
use crate::types::{Session, User};

/// Typed view over a [`KeyValueStore`] holding the user list and session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    users_key: String,
    session_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Store using the default `users` / `currentUser` keys.
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, DEFAULT_USERS_KEY, DEFAULT_SESSION_KEY)
    }

    pub fn with_keys(backend: S, users_key: &str, session_key: &str) -> Self {
        Self { backend, users_key: users_key.to_owned(), session_key: session_key.to_owned() }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// All registered users. Empty when absent or unparsable.
    pub fn load_users(&self) -> Vec<User> {
        load_json(&self.backend, &self.users_key).unwrap_or_default()
    }

    /// Overwrite the full user list.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`StorageError`].
    pub fn save_users(&self, users: &[User]) -> Result<(), StorageError> {
        save_json(&self.backend, &self.users_key, users)
    }

    /// The persisted session, if one exists and parses.
    pub fn load_session(&self) -> Option<Session> {
        load_json(&self.backend, &self.session_key)
    }

    /// Persist `session` as the current session.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`StorageError`].
    pub fn save_session(&self, session: &Session) -> Result<(), StorageError> {
        save_json(&self.backend, &self.session_key, session)
    }

    /// Drop the persisted session. Backend failures are logged, not returned.
    pub fn clear_session(&self) {
        if let Err(e) = self.backend.remove_item(&self.session_key) {
            log::warn!("failed to clear persisted session: {e}");
        }
    }
}
