//! Home page: latest articles with client-side search.

use std::sync::Arc;

use devblog_core::article::{ArticleQuery, ArticleRepository};
use devblog_core::identity::User;
use devblog_core::search::SearchFilter;

use super::article_card::ArticleCard;
use crate::article_store::{ArticleStore, StoreState};

/// Rendered state of the home page.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeView {
    Loading,
    /// Fetch failed; the page offers "Try Again".
    Error { message: String },
    Articles {
        cards: Vec<ArticleCard>,
        /// Number of matches, shown only while a search term is set.
        result_count: Option<usize>,
    },
}

/// View-model of the home page.
pub struct HomeViewModel {
    repository: Arc<dyn ArticleRepository>,
    store: ArticleStore,
    search: SearchFilter,
}

impl HomeViewModel {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self {
            repository,
            store: ArticleStore::new(),
            search: SearchFilter::default(),
        }
    }

    /// Fetches the latest articles.
    pub async fn refresh(&self) -> bool {
        self.store
            .refresh(self.repository.as_ref(), &ArticleQuery::latest())
            .await
    }

    /// Explicit retry after a failed fetch.
    pub async fn retry(&self) -> bool {
        self.refresh().await
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.set_term(term);
    }

    /// Leaves the page: late fetch results are dropped and the search term
    /// is reset.
    pub async fn unmount(&mut self) {
        self.store.detach().await;
        self.search.clear();
    }

    /// Builds the page for `user` (who decides where "Read More" leads).
    pub async fn view(&self, user: Option<&User>) -> HomeView {
        match self.store.state().await {
            StoreState::Loading => HomeView::Loading,
            StoreState::Failed(message) => HomeView::Error { message },
            StoreState::Loaded(articles) => {
                let cards: Vec<ArticleCard> = self
                    .search
                    .apply(&articles)
                    .into_iter()
                    .map(|article| ArticleCard::new(article, user))
                    .collect();
                let result_count = (!self.search.is_empty()).then_some(cards.len());
                HomeView::Articles {
                    cards,
                    result_count,
                }
            }
        }
    }
}
