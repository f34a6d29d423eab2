//! Key-value persistence for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store wraps `window.localStorage`, which may be missing
//! (privacy modes, sandboxed frames) or throw on access. Both cases surface as
//! [`StorageError`] so callers can degrade to session-only behavior.
//!
//! TRADE-OFFS
//! ==========
//! Backend handles are acquired once at construction. A store that is
//! unavailable at startup stays unavailable for the page lifetime.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Failure reading or writing persistent storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("storage {op} of `{key}` failed: {message}")]
    Backend {
        op: &'static str,
        key: String,
        message: String,
    },
}

/// String key-value store. Absent keys read as `Ok(None)`.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend is missing or rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend is missing or rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only store. Values vanish with the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by `window.localStorage`.
#[cfg(feature = "csr")]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl BrowserStore {
    /// Acquire `localStorage`. Missing or blocked storage yields a store whose
    /// every access fails with [`StorageError::Unavailable`].
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            Some(Err(err)) => {
                log::warn!("localStorage blocked: {}", js_message(&err));
                None
            }
            _ => None,
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| backend_error("read", key, &err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| backend_error("write", key, &err))
    }
}

#[cfg(feature = "csr")]
fn backend_error(op: &'static str, key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend {
        op,
        key: key.to_owned(),
        message: js_message(err),
    }
}

#[cfg(feature = "csr")]
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Persistent store for the current environment.
///
/// Browser builds use `localStorage`; native builds fall back to a
/// session-only [`MemoryStore`].
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "csr")]
    {
        Box::new(BrowserStore::open())
    }
    #[cfg(not(feature = "csr"))]
    {
        Box::new(MemoryStore::new())
    }
}
