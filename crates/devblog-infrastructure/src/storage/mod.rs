//! Storage layer for atomic file operations.

mod atomic_json;
mod json_file_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use json_file_storage::JsonFileKeyValueStorage;
