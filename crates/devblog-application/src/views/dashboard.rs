//! Dashboard: recommended articles and the user's bookmarks.
//!
//! The saved-articles registry follows the identity session. Whenever the
//! session changes (sign-in, sign-out, switching users) the registry is
//! reloaded under the new user's key and the recommendations are fetched
//! again.

use std::sync::Arc;

use devblog_core::article::{ArticleId, ArticleQuery, ArticleRepository};
use devblog_core::error::Result;
use devblog_core::identity::{IdentitySession, User, UserId};
use devblog_core::saved::{KeyValueStorage, SavedArticlesRegistry};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::article_store::{ArticleStore, StoreState};

/// Tags shown on a recommendation.
pub const RECOMMENDED_TAG_LIMIT: usize = 2;

/// One entry of "Recommended for You".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedArticle {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub saved: bool,
}

impl RecommendedArticle {
    /// Label of the bookmark button.
    pub fn save_label(&self) -> &'static str {
        if self.saved { "Saved" } else { "Save" }
    }
}

/// Rendered state of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Error {
        message: String,
    },
    Ready {
        greeting: String,
        saved_count: usize,
        recommended: Vec<RecommendedArticle>,
    },
}

/// View-model of the dashboard.
pub struct DashboardViewModel {
    repository: Arc<dyn ArticleRepository>,
    store: ArticleStore,
    registry: SavedArticlesRegistry,
    session: watch::Receiver<Option<User>>,
    user: Option<User>,
    page_size: u32,
}

impl DashboardViewModel {
    /// Creates the dashboard and loads the current user's saved articles.
    pub fn new(
        repository: Arc<dyn ArticleRepository>,
        storage: Arc<dyn KeyValueStorage>,
        session: &dyn IdentitySession,
        page_size: u32,
    ) -> Self {
        let mut receiver = session.subscribe();
        let user = receiver.borrow_and_update().clone();

        let mut dashboard = Self {
            repository,
            store: ArticleStore::new(),
            registry: SavedArticlesRegistry::new(storage),
            session: receiver,
            user: None,
            page_size,
        };
        dashboard.apply_user(user);
        dashboard
    }

    /// Fetches the recommended articles.
    pub async fn refresh(&self) -> bool {
        self.store
            .refresh(
                self.repository.as_ref(),
                &ArticleQuery::with_per_page(self.page_size),
            )
            .await
    }

    /// Picks up a pending session change without waiting.
    ///
    /// Returns `true` if the user changed; the registry is then already
    /// reloaded for the new user.
    pub fn sync_session(&mut self) -> bool {
        if !self.session.has_changed().unwrap_or(false) {
            return false;
        }
        let user = self.session.borrow_and_update().clone();
        self.apply_user(user);
        true
    }

    /// Applies a pending session change and refetches if there was one.
    pub async fn handle_session_change(&mut self) -> bool {
        if !self.sync_session() {
            return false;
        }
        self.refresh().await;
        true
    }

    /// Waits for the next session change and handles it.
    ///
    /// Returns `false` once the session has been dropped.
    pub async fn wait_for_session_change(&mut self) -> bool {
        if self.session.changed().await.is_err() {
            return false;
        }
        let user = self.session.borrow_and_update().clone();
        self.apply_user(user);
        self.refresh().await;
        true
    }

    /// Toggles the bookmark for `article_id`. Does nothing when signed out.
    pub fn toggle_save(&mut self, article_id: &ArticleId) -> Result<bool> {
        self.sync_session();
        let uid = self.user_id().cloned();
        self.registry.toggle(uid.as_ref(), article_id)
    }

    pub fn is_saved(&self, article_id: &ArticleId) -> bool {
        self.registry.is_saved(self.user_id(), article_id)
    }

    pub fn saved_count(&self) -> usize {
        self.registry.saved_count(self.user_id())
    }

    pub fn saved_ids(&self) -> &[ArticleId] {
        self.registry.saved_ids(self.user_id())
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn greeting(&self) -> String {
        let name = self.user.as_ref().map_or("Developer", User::greeting_name);
        format!("Welcome back, {}", name)
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Leaves the page; late fetch results are dropped.
    pub async fn unmount(&mut self) {
        self.store.detach().await;
    }

    pub async fn view(&self) -> DashboardView {
        match self.store.state().await {
            StoreState::Loading => DashboardView::Loading,
            StoreState::Failed(message) => DashboardView::Error { message },
            StoreState::Loaded(articles) => DashboardView::Ready {
                greeting: self.greeting(),
                saved_count: self.saved_count(),
                recommended: articles
                    .iter()
                    .map(|article| RecommendedArticle {
                        id: article.id.clone(),
                        title: article.title.clone(),
                        description: article.description.clone(),
                        tags: article.preview_tags(RECOMMENDED_TAG_LIMIT),
                        cover_image: article.cover_image.clone(),
                        saved: self.is_saved(&article.id),
                    })
                    .collect(),
            },
        }
    }

    fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.uid)
    }

    fn apply_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => info!(user = %u.uid, "Dashboard session changed"),
            None => debug!("Dashboard session cleared"),
        }
        self.registry.load(user.as_ref().map(|u| &u.uid));
        self.user = user;
    }
}
