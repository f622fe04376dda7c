//! Key-value storage persisted as a single JSON object on disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use devblog_core::error::{DevBlogError, Result};
use devblog_core::saved::KeyValueStorage;
use tracing::debug;

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};
use crate::paths::DevBlogPaths;

type Entries = BTreeMap<String, String>;

/// [`KeyValueStorage`] backed by one JSON file (`{"key": "value", ...}`).
///
/// Each `set` is a locked read-modify-write of the whole file followed by
/// an atomic rename, so writers in different processes never lose each
/// other's keys and the last writer of a key wins.
pub struct JsonFileKeyValueStorage {
    file: AtomicJsonFile<Entries>,
}

impl JsonFileKeyValueStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Storage at the platform default location.
    pub fn new_default() -> Result<Self> {
        let path = DevBlogPaths::storage_file().map_err(|e| DevBlogError::storage(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl KeyValueStorage for JsonFileKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.file.load().map_err(into_storage_error)?;
        Ok(entries.and_then(|mut e| e.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file
            .update(Entries::new(), |entries| {
                entries.insert(key.to_string(), value.to_string());
                Ok(())
            })
            .map_err(into_storage_error)?;

        debug!(key, path = %self.file.path().display(), "Stored value");
        Ok(())
    }
}

fn into_storage_error(err: AtomicJsonError) -> DevBlogError {
    match err {
        AtomicJsonError::IoError(e) => e.into(),
        AtomicJsonError::JsonError(e) => e.into(),
        AtomicJsonError::LockError(message) => DevBlogError::storage(message),
    }
}
