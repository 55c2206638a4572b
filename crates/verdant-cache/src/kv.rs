//! Key-value store wrapper with automatic serialization.

use std::rc::Rc;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A string key-value backend.
pub trait KeyValueStore {
    /// Read the raw value for `key`, if present.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write the raw value for `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Cloning is cheap and clones share the same backend.
#[derive(Clone)]
pub struct Cache {
    store: Rc<dyn KeyValueStore>,
}

impl Cache {
    /// Wrap a backend.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// value does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_raw(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.get_raw(key)?.is_some())
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_set_get_delete() {
        let cache = Cache::new(MemoryStore::new());
        let value = vec!["tea".to_string(), "honey".to_string()];

        cache.set("recent", &value).unwrap();
        assert!(cache.exists("recent").unwrap());
        assert_eq!(cache.get::<Vec<String>>("recent").unwrap(), Some(value));

        cache.delete("recent").unwrap();
        assert_eq!(cache.get::<Vec<String>>("recent").unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let store = MemoryStore::new();
        store.set_raw("recent", "{not json").unwrap();

        let cache = Cache::new(store);
        assert!(matches!(
            cache.get::<Vec<String>>("recent"),
            Err(CacheError::Serialization(_))
        ));
    }

    #[test]
    fn test_clones_share_backend() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache.clone().set("k", &1u32).unwrap();

        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("1"));
    }
}
