//! Saved-articles domain module.
//!
//! # Module Structure
//!
//! - `storage`: the string key-value store the registry persists into
//! - `registry`: per-user saved-article sets and their stored encoding

mod registry;
mod storage;

pub use registry::{
    RegistryDecodeError, SAVED_ARTICLES_KEY_PREFIX, SavedArticlesRegistry, SavedSet,
    decode_saved_set, storage_key,
};
pub use storage::{InMemoryKeyValueStorage, KeyValueStorage};
