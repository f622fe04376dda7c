//! HTTP implementation of the article repository.
//!
//! Talks to a dev.to compatible API:
//! - `GET {base}/articles[?per_page=N]`
//! - `GET {base}/articles/{id}`

use async_trait::async_trait;
use devblog_core::article::{Article, ArticleId, ArticleQuery, ArticleRepository};
use devblog_core::error::{DevBlogError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Article repository backed by the public article API.
#[derive(Clone)]
pub struct HttpArticleRepository {
    client: Client,
    base_url: String,
}

impl HttpArticleRepository {
    /// Creates a repository for `base_url` (e.g. `https://dev.to/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a repository reusing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn articles_url(&self) -> String {
        format!("{}/articles", self.base_url)
    }

    fn article_url(&self, id: &ArticleId) -> String {
        format!("{}/articles/{}", self.base_url, id)
    }
}

#[async_trait]
impl ArticleRepository for HttpArticleRepository {
    async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        let url = self.articles_url();

        let mut request = self.client.get(&url);
        if let Some(per_page) = query.per_page {
            request = request.query(&[("per_page", per_page)]);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, "Article list request failed: {}", e);
            DevBlogError::fetch_failed(format!("Failed to fetch articles: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(url = %url, %status, "Article API returned an error");
            return Err(DevBlogError::fetch_failed(format!(
                "Article API error ({}): {}",
                status, error_text
            )));
        }

        let articles: Vec<Article> = response.json().await.map_err(|e| {
            DevBlogError::fetch_failed(format!("Failed to parse article list: {}", e))
        })?;

        debug!(url = %url, count = articles.len(), "Fetched articles");
        Ok(articles)
    }

    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>> {
        let url = self.article_url(id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, "Article request failed: {}", e);
            DevBlogError::fetch_failed(format!("Failed to fetch article {}: {}", id, e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url = %url, "Article not found");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url = %url, %status, "Article API returned an error");
            return Err(DevBlogError::fetch_failed(format!(
                "Article API error ({})",
                status
            )));
        }

        let article: Article = response.json().await.map_err(|e| {
            DevBlogError::fetch_failed(format!("Failed to parse article {}: {}", id, e))
        })?;

        Ok(Some(article))
    }
}
