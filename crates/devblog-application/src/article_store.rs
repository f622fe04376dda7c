//! In-memory article store for a single view.
//!
//! Holds the result of the most recent fetch. A failed fetch replaces the
//! previous list with an error state instead of leaving stale articles on
//! screen.

use std::sync::Arc;

use devblog_core::article::{Article, ArticleQuery, ArticleRepository};
use devblog_core::error::Result;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Message shown when the article list cannot be fetched.
pub const FETCH_ARTICLES_FAILED: &str = "Failed to fetch articles. Please try again later.";

/// What the view should display.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreState {
    Loading,
    Loaded(Vec<Article>),
    Failed(String),
}

/// Handle for one in-flight refresh.
///
/// Bound to the mount epoch at the time the refresh started; completing a
/// ticket from an earlier epoch is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

#[derive(Debug)]
struct Inner {
    state: StoreState,
    epoch: u64,
}

/// Shared, cloneable article store.
///
/// Refreshes are neither coalesced nor ordered: when several are in flight
/// the last completion to arrive wins.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    inner: Arc<RwLock<Inner>>,
    failure_message: String,
}

impl ArticleStore {
    /// A store in the `Loading` state.
    pub fn new() -> Self {
        Self::with_failure_message(FETCH_ARTICLES_FAILED)
    }

    /// A store that reports failures with `message`.
    pub fn with_failure_message(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: StoreState::Loading,
                epoch: 0,
            })),
            failure_message: message.into(),
        }
    }

    /// Marks the store as loading and returns a ticket for the result.
    pub async fn begin_refresh(&self) -> RefreshTicket {
        let mut inner = self.inner.write().await;
        inner.state = StoreState::Loading;
        RefreshTicket { epoch: inner.epoch }
    }

    /// Applies the outcome of a refresh.
    ///
    /// Returns `false` if the ticket is stale (the view detached meanwhile)
    /// and the result was discarded.
    pub async fn complete(&self, ticket: RefreshTicket, result: Result<Vec<Article>>) -> bool {
        let mut inner = self.inner.write().await;
        if ticket.epoch != inner.epoch {
            debug!(
                ticket = ticket.epoch,
                current = inner.epoch,
                "Discarding article fetch for a detached view"
            );
            return false;
        }

        inner.state = match result {
            Ok(articles) => {
                debug!(count = articles.len(), "Article store updated");
                StoreState::Loaded(articles)
            }
            Err(e) => {
                warn!("Article fetch failed: {}", e);
                StoreState::Failed(self.failure_message.clone())
            }
        };
        true
    }

    /// Fetches from `repository` and stores the outcome.
    pub async fn refresh(&self, repository: &dyn ArticleRepository, query: &ArticleQuery) -> bool {
        let ticket = self.begin_refresh().await;
        let result = repository.list_articles(query).await;
        self.complete(ticket, result).await
    }

    /// Detaches the current view; pending refreshes will be discarded.
    pub async fn detach(&self) {
        let mut inner = self.inner.write().await;
        inner.epoch += 1;
    }

    pub async fn state(&self) -> StoreState {
        self.inner.read().await.state.clone()
    }

    /// Loaded articles, or an empty list while loading or after a failure.
    pub async fn articles(&self) -> Vec<Article> {
        match &self.inner.read().await.state {
            StoreState::Loaded(articles) => articles.clone(),
            _ => Vec::new(),
        }
    }

    pub async fn is_loading(&self) -> bool {
        matches!(self.inner.read().await.state, StoreState::Loading)
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devblog_core::article::TagList;
    use devblog_core::error::DevBlogError;

    fn article(id: i64) -> Article {
        Article::new(id, format!("Article {}", id), "", TagList::default())
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let store = ArticleStore::new();
        assert!(store.is_loading().await);
        assert!(store.articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let store = ArticleStore::new();
        let ticket = store.begin_refresh().await;
        assert!(store.complete(ticket, Ok(vec![article(1)])).await);
        assert_eq!(store.state().await, StoreState::Loaded(vec![article(1)]));
    }

    #[tokio::test]
    async fn test_failure_replaces_previous_data() {
        let store = ArticleStore::new();
        let ticket = store.begin_refresh().await;
        store.complete(ticket, Ok(vec![article(1)])).await;

        let ticket = store.begin_refresh().await;
        store
            .complete(ticket, Err(DevBlogError::fetch_failed("offline")))
            .await;

        assert_eq!(
            store.state().await,
            StoreState::Failed(FETCH_ARTICLES_FAILED.to_string())
        );
        assert!(store.articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_last_completion_wins() {
        let store = ArticleStore::new();
        let first = store.begin_refresh().await;
        let second = store.begin_refresh().await;

        store.complete(second, Ok(vec![article(2)])).await;
        store.complete(first, Ok(vec![article(1)])).await;

        assert_eq!(store.articles().await, vec![article(1)]);
    }

    #[tokio::test]
    async fn test_detach_discards_late_result() {
        let store = ArticleStore::new();
        let ticket = store.begin_refresh().await;
        store.detach().await;

        assert!(!store.complete(ticket, Ok(vec![article(1)])).await);
        assert!(store.is_loading().await);
    }

    #[tokio::test]
    async fn test_custom_failure_message() {
        let store = ArticleStore::with_failure_message("nope");
        let ticket = store.begin_refresh().await;
        store
            .complete(ticket, Err(DevBlogError::fetch_failed("x")))
            .await;
        assert_eq!(store.state().await, StoreState::Failed("nope".into()));
    }
}
