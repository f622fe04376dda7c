//! Domain layer for DevBlog.
//!
//! Holds the article model, the client-side search filter, the per-user
//! saved-articles registry and the traits the outer layers implement
//! (article API, key-value storage, identity session). Nothing in here
//! performs I/O on its own.

pub mod article;
pub mod config;
pub mod error;
pub mod identity;
pub mod saved;
pub mod search;

// Re-export common error type
pub use error::{DevBlogError, Result};
