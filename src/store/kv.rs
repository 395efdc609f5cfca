//! Key-value storage backends shaped like the browser `Storage` API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs string get/set/remove. `BrowserStore` wraps
//! `window.localStorage` in the `csr` build; `MemoryStore` backs native
//! builds, unit tests, and browsers where localStorage is blocked.
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail: a missing or unreadable entry is just `None`, which
//! keeps the UI usable in private-browsing modes. Writes report errors so
//! callers can decide whether a failed write matters.

#[cfg(test)]
#[path = "kv_test.rs"]
mod kv_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure writing to a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is not available")]
    Unavailable,
    #[error("storage quota exceeded writing '{key}'")]
    QuotaExceeded { key: String },
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage with localStorage semantics.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` if absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Load and decode a JSON value stored under `key`.
///
/// Absent and undecodable entries both yield `None`; the latter is logged.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring corrupted storage entry '{key}': {e}");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails, or the backend's
/// error if the write is rejected.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    store.set_item(key, &raw)
}

/// In-process store. Clones share entries, like two handles on one origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values exceed `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self { entries: Rc::default(), quota_bytes: Some(quota_bytes) }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Total bytes of all keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.borrow().iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.entries.borrow().get(key).map_or(0, |old| key.len() + old.len());
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_owned() });
            }
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` for the current origin.
#[cfg(feature = "csr")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl BrowserStore {
    /// Open the origin's localStorage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside a window context or when
    /// the browser denies storage access.
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem only throws QuotaExceededError once storage is reachable.
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded { key: key.to_owned() })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|_| StorageError::Unavailable)
    }
}

/// The best store available in this build: localStorage in the browser,
/// otherwise an empty in-memory store.
pub fn open_default() -> Box<dyn KeyValueStore> {
    #[cfg(feature = "csr")]
    {
        match BrowserStore::open() {
            Ok(store) => return Box::new(store),
            Err(e) => log::warn!("{e}; falling back to in-memory storage"),
        }
    }
    Box::new(MemoryStore::new())
}
