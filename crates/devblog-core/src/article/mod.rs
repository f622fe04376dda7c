//! Article domain module.
//!
//! - `model`: the `Article` shape returned by the API, ids and tag lists
//! - `repository`: read-only access to the remote API

pub mod model;
pub mod repository;

pub use model::{Article, ArticleId, Author, TagList};
pub use repository::{ArticleQuery, ArticleRepository};
