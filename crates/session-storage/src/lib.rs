//! Session Storage
//!
//! One value behind one key. The browser backend persists it as JSON in
//! `localStorage`; the memory backend keeps it for the lifetime of the process.

use std::marker::PhantomData;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while persisting a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No `window` or `localStorage` in this environment
    #[error("local storage is not available")]
    Unavailable,
    /// The value could not be serialized
    #[error("failed to serialize value: {0}")]
    Serialize(String),
    /// The browser refused the write (quota, privacy mode, ...)
    #[error("failed to write key `{0}`")]
    Write(String),
}

/// Get/set/clear access to a single stored session value
pub trait SessionStorage<T>: Send + Sync {
    /// Current value, `None` when absent or unreadable
    fn get(&self) -> Option<T>;

    /// Replace the stored value
    fn set(&self, value: &T) -> Result<(), StorageError>;

    /// Remove the stored value
    fn clear(&self);

    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

// ========================
// Browser backend
// ========================

/// `window.localStorage` under a fixed key
pub struct LocalStorage<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> LocalStorage<T> {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl<T> SessionStorage<T> for LocalStorage<T>
where
    T: Serialize + DeserializeOwned,
{
    fn get(&self) -> Option<T> {
        let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
        decode(self.key, &raw)
    }

    fn set(&self, value: &T) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        storage
            .set_item(self.key, &raw)
            .map_err(|_| StorageError::Write(self.key.to_string()))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(self.key).is_err() {
                log::warn!("failed to remove `{}` from local storage", self.key);
            }
        }
    }
}

/// Parse a stored JSON string; a literal `null` or garbage reads as absent
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str::<Option<T>>(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring unreadable value under `{}`: {}", key, e);
            None
        }
    }
}

// ========================
// Memory backend
// ========================

/// In-process storage, used off-browser and in tests
pub struct MemoryStorage<T> {
    value: Mutex<Option<T>>,
}

impl<T> MemoryStorage<T> {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }

    pub fn with_value(value: T) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }
}

impl<T> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionStorage<T> for MemoryStorage<T>
where
    T: Clone + Send,
{
    fn get(&self) -> Option<T> {
        self.value.lock().ok()?.clone()
    }

    fn set(&self, value: &T) -> Result<(), StorageError> {
        match self.value.lock() {
            Ok(mut slot) => {
                *slot = Some(value.clone());
                Ok(())
            }
            Err(_) => Err(StorageError::Unavailable),
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.value.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Creds {
        token: String,
    }

    #[test]
    fn test_memory_starts_empty() {
        let storage = MemoryStorage::<Creds>::new();
        assert!(storage.get().is_none());
        assert!(!storage.is_present());
    }

    #[test]
    fn test_memory_set_get_clear() {
        let storage = MemoryStorage::<Creds>::new();
        let creds = Creds { token: "t1".to_string() };

        storage.set(&creds).expect("set failed");
        assert_eq!(storage.get(), Some(creds.clone()));
        assert!(storage.is_present());

        storage.clear();
        assert!(storage.get().is_none());
    }

    #[test]
    fn test_memory_set_replaces() {
        let storage = MemoryStorage::with_value(Creds { token: "old".to_string() });
        storage.set(&Creds { token: "new".to_string() }).unwrap();
        assert_eq!(storage.get().unwrap().token, "new");
    }

    #[test]
    fn test_decode_null_is_absent() {
        assert_eq!(decode::<Creds>("user", "null"), None);
    }

    #[test]
    fn test_decode_garbage_is_absent() {
        assert_eq!(decode::<Creds>("user", "{not json"), None);
        assert_eq!(decode::<Creds>("user", r#"{"other":1}"#), None);
    }

    #[test]
    fn test_decode_value() {
        let decoded = decode::<Creds>("user", r#"{"token":"abc"}"#);
        assert_eq!(decoded, Some(Creds { token: "abc".to_string() }));
    }

    #[test]
    fn test_trait_object() {
        let storage: Box<dyn SessionStorage<Creds>> = Box::new(MemoryStorage::<Creds>::new());
        storage.set(&Creds { token: "x".to_string() }).unwrap();
        assert!(storage.is_present());
    }
}
