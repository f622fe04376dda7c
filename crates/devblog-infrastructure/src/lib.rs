//! Infrastructure adapters for DevBlog.
//!
//! Implements the core traits against the outside world: the public
//! article API over HTTP, a JSON file as durable key-value storage, and a
//! local identity session. Also resolves platform paths and loads
//! `config.toml`.

pub mod config_service;
pub mod http_article_repository;
pub mod local_identity_session;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::http_article_repository::HttpArticleRepository;
pub use crate::local_identity_session::LocalIdentitySession;
pub use crate::paths::DevBlogPaths;
pub use crate::storage::JsonFileKeyValueStorage;
