//! Durable key-value storage abstraction.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{DevBlogError, Result};

/// String-keyed, string-valued storage with synchronous get/set.
///
/// A `set` replaces the previous value in a single step; readers never
/// observe a partially written value.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local storage, suitable for tests and ephemeral sessions.
///
/// # Example
///
/// ```
/// use devblog_core::saved::{InMemoryKeyValueStorage, KeyValueStorage};
///
/// let storage = InMemoryKeyValueStorage::new();
/// storage.set("greeting", "hello").unwrap();
/// assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("hello"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DevBlogError::storage(format!("Failed to read storage: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DevBlogError::storage(format!("Failed to write storage: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = InMemoryKeyValueStorage::new();
        assert!(storage.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_replaces_value() {
        let storage = InMemoryKeyValueStorage::new();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }
}
