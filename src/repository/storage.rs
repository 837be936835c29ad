//! Browser-style key/value storage

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

/// String key/value store with the semantics of web storage: writes are
/// atomic per key and values are opaque strings.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// Drop every key (end of a browsing session)
    fn clear(&self) -> AppResult<()>;
}

/// In-process storage, used for session scope and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Storage("storage lock poisoned".to_string())
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.remove(key);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.items.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

/// Serialize `value` as JSON under `key`
pub(crate) fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

/// Read and parse the JSON stored under `key`.
///
/// A value that no longer parses is reported as absent.
pub(crate) fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> AppResult<Option<T>> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable value under {}: {}", key, e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.clear().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_json_treats_corrupt_value_as_missing() {
        let storage = MemoryStorage::new();
        storage.set_item("record", "{not json").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&storage, "record").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_json_helpers_round_trip() {
        let storage = MemoryStorage::new();
        save_json(&storage, "numbers", &vec![1u32, 2, 3]).unwrap();
        let loaded: Option<Vec<u32>> = load_json(&storage, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }
}
