//! Article repository trait.

use async_trait::async_trait;

use crate::article::model::{Article, ArticleId};
use crate::error::Result;

/// Listing parameters for [`ArticleRepository::list_articles`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Page size requested from the API; `None` keeps the API default.
    pub per_page: Option<u32>,
}

impl ArticleQuery {
    /// Query with the API's default page size.
    pub fn latest() -> Self {
        Self::default()
    }

    /// Query limited to `per_page` articles.
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
        }
    }
}

/// Read-only access to the remote article API.
///
/// Implementations never retry and never cache; a failed request is
/// reported once as `DevBlogError::FetchFailed`.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Lists articles, most recent first, in the order the API returns them.
    async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>>;

    /// Fetches a single article.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(article))` if the article exists
    /// - `Ok(None)` if the API reports it as not found
    /// - `Err(_)` if the request failed
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>>;
}
