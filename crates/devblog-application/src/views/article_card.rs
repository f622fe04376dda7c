//! Article card summary.

use devblog_core::article::{Article, ArticleId};
use devblog_core::identity::User;

use crate::routes::{Route, read_more};

/// Tags shown on a card.
pub const CARD_TAG_LIMIT: usize = 3;

/// Everything a list view shows for one article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub published: Option<String>,
    pub reading_time_minutes: Option<u32>,
    pub reactions: u64,
    pub comments: u64,
    /// Where "Read More" leads for the current user.
    pub read_more: Route,
}

impl ArticleCard {
    pub fn new(article: &Article, user: Option<&User>) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            tags: article.preview_tags(CARD_TAG_LIMIT),
            cover_image: article.cover_image.clone(),
            author_name: article.author_name().to_string(),
            author_avatar: article
                .user
                .as_ref()
                .and_then(|u| u.avatar())
                .map(str::to_string),
            published: article.readable_publish_date.clone(),
            reading_time_minutes: article.reading_time_minutes,
            reactions: article.public_reactions_count,
            comments: article.comments_count,
            read_more: read_more(&article.id, user),
        }
    }
}
