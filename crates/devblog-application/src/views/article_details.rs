//! Article details page.

use std::sync::Arc;

use devblog_core::article::{Article, ArticleId, ArticleRepository};
use tracing::warn;

/// Message shown when the article cannot be fetched.
pub const FETCH_DETAILS_FAILED: &str = "Failed to fetch article details.";

/// Message shown when the API has no such article.
pub const ARTICLE_NOT_FOUND: &str = "Article not found";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(Box<Article>),
    NotFound,
    Failed(String),
}

impl DetailsState {
    /// Text of the error panel, if the page shows one.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DetailsState::NotFound => Some(ARTICLE_NOT_FOUND),
            DetailsState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// View-model of a single article page.
pub struct ArticleDetailsViewModel {
    repository: Arc<dyn ArticleRepository>,
    id: ArticleId,
    state: DetailsState,
}

impl ArticleDetailsViewModel {
    pub fn new(repository: Arc<dyn ArticleRepository>, id: ArticleId) -> Self {
        Self {
            repository,
            id,
            state: DetailsState::Loading,
        }
    }

    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn state(&self) -> &DetailsState {
        &self.state
    }

    /// Fetches the article. Any previous state is replaced.
    pub async fn load(&mut self) -> &DetailsState {
        self.state = DetailsState::Loading;
        self.state = match self.repository.find_by_id(&self.id).await {
            Ok(Some(article)) => DetailsState::Loaded(Box::new(article)),
            Ok(None) => DetailsState::NotFound,
            Err(e) => {
                warn!(article = %self.id, "Failed to load article: {}", e);
                DetailsState::Failed(FETCH_DETAILS_FAILED.to_string())
            }
        };
        &self.state
    }

    /// Navigates to another article; the state resets to `Loading`.
    pub fn set_id(&mut self, id: ArticleId) {
        if id != self.id {
            self.id = id;
            self.state = DetailsState::Loading;
        }
    }

    /// All normalized tags of the loaded article.
    pub fn tags(&self) -> Vec<String> {
        match &self.state {
            DetailsState::Loaded(article) => article.tags(),
            _ => Vec::new(),
        }
    }
}
