//! Typed wrapper with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{KvError, KvStore};

/// Type-safe view over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```
/// use cart_kv::{JsonStore, MemoryStore};
///
/// let store = JsonStore::new(MemoryStore::new());
/// store.set("numbers", &vec![1, 2, 3]).unwrap();
///
/// let numbers: Option<Vec<i32>> = store.get("numbers").unwrap();
/// assert_eq!(numbers, Some(vec![1, 2, 3]));
/// ```
#[derive(Debug, Default)]
pub struct JsonStore<S> {
    inner: S,
}

impl<S: KvStore> JsonStore<S> {
    /// Wrap a raw store.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the underlying raw store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get a value.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// text is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, KvError> {
        match self.inner.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value, overwriting whatever was stored before.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let raw = serde_json::to_string(value)?;
        self.inner.set(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), KvError> {
        self.inner.remove(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, KvError> {
        self.inner.exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: i64,
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = JsonStore::new(MemoryStore::new());
        let value: Option<Entry> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_writes_json_text() {
        let store = JsonStore::new(MemoryStore::new());
        let entries = vec![Entry {
            id: "a".to_string(),
            quantity: 2,
        }];
        store.set("entries", &entries).unwrap();

        let raw = store.inner().get("entries").unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"a","quantity":2}]"#);
    }

    #[test]
    fn test_get_invalid_json_is_error() {
        let store = JsonStore::new(MemoryStore::with_entry("entries", "not json"));
        let result: Result<Option<Vec<Entry>>, _> = store.get("entries");
        assert!(matches!(result, Err(KvError::Serialize(_))));
    }

    #[test]
    fn test_delete() {
        let store = JsonStore::new(MemoryStore::with_entry("entries", "[]"));
        store.delete("entries").unwrap();
        assert!(!store.exists("entries").unwrap());
    }
}
