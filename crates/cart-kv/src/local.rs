//! Browser `localStorage` backend.

use crate::{KvError, KvStore};

/// Store backed by `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's local storage.
    pub fn open() -> Result<Self, KvError> {
        let window =
            web_sys::window().ok_or_else(|| KvError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| KvError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| KvError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KvStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        self.storage
            .get_item(key)
            .map_err(|e| KvError::Store(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| KvError::Store(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        self.storage
            .remove_item(key)
            .map_err(|e| KvError::Store(format!("{e:?}")))
    }
}
