//! Typed store with automatic JSON serialization.

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::StoreError;

/// Type-safe key-value store over a [`StorageBackend`].
///
/// Values are serialized as JSON. Reads never fail: any problem reading or
/// decoding a value is reported as the value being absent, so callers can
/// always fall back to an empty initial state.
pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    /// Create a store over an in-memory backend.
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
        }
    }

    /// Open a file-backed store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Ok(Self {
            backend: Box::new(FileBackend::open(dir)?),
        })
    }

    /// Create a store over a custom backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Get a value.
    ///
    /// Returns `None` if the key is absent, unreadable, or holds JSON that
    /// does not decode to `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(key, error = %e, "store read failed, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "stored value failed to decode, treating as absent");
                None
            }
        }
    }

    /// Set a value.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }

    /// Remove a value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }

    /// Check whether a key holds any raw value.
    pub fn exists(&self, key: &str) -> bool {
        matches!(self.backend.get(key), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_roundtrip() {
        let mut store = Store::in_memory();
        store.set("wishlist", &vec![101u64, 102]).unwrap();

        let back: Option<Vec<u64>> = store.get("wishlist");
        assert_eq!(back, Some(vec![101, 102]));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::in_memory();
        let value: Option<Vec<u64>> = store.get("nothing");
        assert!(value.is_none());
    }

    #[test]
    fn test_corrupt_value_is_none() {
        let mut backend = MemoryBackend::new();
        backend.set("users", "{not json").unwrap();
        let store = Store::with_backend(Box::new(backend));

        let value: Option<Vec<String>> = store.get("users");
        assert!(value.is_none());
    }

    #[test]
    fn test_wrong_shape_is_none() {
        let mut store = Store::in_memory();
        store.set("key", &"a string").unwrap();

        let value: Option<Vec<u64>> = store.get("key");
        assert!(value.is_none());
    }

    #[test]
    fn test_remove_and_exists() {
        let mut store = Store::in_memory();
        store.set("currentUserEmail", &"a@b.com").unwrap();
        assert!(store.exists("currentUserEmail"));

        store.remove("currentUserEmail").unwrap();
        assert!(!store.exists("currentUserEmail"));
    }

    #[test]
    fn test_file_store_rehydrates() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = Store::open(dir.path()).unwrap();
            store.set("users", &vec!["ana@example.com"]).unwrap();
        }
        let store = Store::open(dir.path()).unwrap();
        let users: Option<Vec<String>> = store.get("users");
        assert_eq!(users, Some(vec!["ana@example.com".to_string()]));
    }
}
