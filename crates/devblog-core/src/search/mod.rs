//! Client-side article search.
//!
//! Case-insensitive substring matching over title, description and tags.

pub mod filter;

pub use filter::{SearchFilter, filter_articles};
