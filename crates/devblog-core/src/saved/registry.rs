//! Saved-articles registry.
//!
//! Each user's bookmarks live under their own storage key
//! (`savedArticles_<uid>`) as a JSON list of article ids. Reading is
//! fail-open: a missing or undecodable value loads as an empty set.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::storage::KeyValueStorage;
use crate::article::ArticleId;
use crate::error::Result;
use crate::identity::UserId;

/// Prefix of every registry storage key.
pub const SAVED_ARTICLES_KEY_PREFIX: &str = "savedArticles_";

/// Storage key holding the saved set of `user`.
pub fn storage_key(user: &UserId) -> String {
    format!("{}{}", SAVED_ARTICLES_KEY_PREFIX, user)
}

/// Why a stored saved-articles value could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryDecodeError {
    #[error("stored value is not valid JSON: {0}")]
    NotJson(String),

    #[error("stored value is not a list of article ids: {0}")]
    WrongShape(String),
}

/// Ordered set of article ids without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedSet {
    ids: Vec<ArticleId>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from ids, keeping the first occurrence of duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = ArticleId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn contains(&self, id: &ArticleId) -> bool {
        self.ids.contains(id)
    }

    /// Removes `id` if present, appends it otherwise.
    ///
    /// Returns whether `id` is a member afterwards.
    pub fn toggle(&mut self, id: &ArticleId) -> bool {
        if let Some(pos) = self.ids.iter().position(|saved| saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[ArticleId] {
        &self.ids
    }

    /// Stored encoding: a JSON array in insertion order.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.ids)?)
    }
}

/// Decodes a stored value into a [`SavedSet`].
pub fn decode_saved_set(raw: &str) -> std::result::Result<SavedSet, RegistryDecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| RegistryDecodeError::NotJson(e.to_string()))?;
    let ids: Vec<ArticleId> =
        serde_json::from_value(value).map_err(|e| RegistryDecodeError::WrongShape(e.to_string()))?;
    Ok(SavedSet::from_ids(ids))
}

/// Per-user bookmarks backed by a [`KeyValueStorage`].
///
/// Every operation takes the user explicitly. `None` stands for the
/// signed-out state: reads report "not saved" and toggles do nothing.
///
/// Concurrent writers on the same key (e.g. two processes for one user) are
/// last-write-wins; this registry never merges.
pub struct SavedArticlesRegistry {
    storage: Arc<dyn KeyValueStorage>,
    loaded: HashMap<UserId, SavedSet>,
}

impl SavedArticlesRegistry {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            loaded: HashMap::new(),
        }
    }

    /// Reads the stored set for `user` and makes it the in-memory view.
    ///
    /// Never fails: a missing value, a storage read error or an undecodable
    /// value all load as an empty set.
    pub fn load(&mut self, user: Option<&UserId>) -> SavedSet {
        let Some(user) = user else {
            return SavedSet::new();
        };

        let set = match self.read(user) {
            Ok(set) => set,
            Err(reason) => {
                warn!(user = %user, "Discarding saved articles: {}", reason);
                SavedSet::new()
            }
        };

        debug!(user = %user, count = set.len(), "Loaded saved articles");
        self.loaded.insert(user.clone(), set.clone());
        set
    }

    /// Toggles membership of `article_id` for `user` and persists the result.
    ///
    /// A user that was never loaded is loaded first. Returns whether the
    /// article is saved afterwards; always `false` without a user.
    pub fn toggle(&mut self, user: Option<&UserId>, article_id: &ArticleId) -> Result<bool> {
        let Some(user) = user else {
            debug!(article = %article_id, "Ignoring toggle without a signed-in user");
            return Ok(false);
        };

        if !self.loaded.contains_key(user) {
            self.load(Some(user));
        }

        let mut updated = self.loaded.get(user).cloned().unwrap_or_default();
        let saved = updated.toggle(article_id);

        self.storage.set(&storage_key(user), &updated.encode()?)?;
        self.loaded.insert(user.clone(), updated);

        debug!(user = %user, article = %article_id, saved, "Toggled saved article");
        Ok(saved)
    }

    /// Membership test against the in-memory set of `user`.
    ///
    /// Returns `false` for a user that has not been loaded.
    pub fn is_saved(&self, user: Option<&UserId>, article_id: &ArticleId) -> bool {
        user.and_then(|u| self.loaded.get(u))
            .is_some_and(|set| set.contains(article_id))
    }

    /// Saved ids of `user` in insertion order.
    pub fn saved_ids(&self, user: Option<&UserId>) -> &[ArticleId] {
        user.and_then(|u| self.loaded.get(u))
            .map(SavedSet::ids)
            .unwrap_or(&[])
    }

    pub fn saved_count(&self, user: Option<&UserId>) -> usize {
        self.saved_ids(user).len()
    }

    fn read(&self, user: &UserId) -> std::result::Result<SavedSet, String> {
        match self.storage.get(&storage_key(user)) {
            Ok(Some(raw)) => decode_saved_set(&raw).map_err(|e| e.to_string()),
            Ok(None) => Ok(SavedSet::new()),
            Err(e) => Err(e.to_string()),
        }
    }
}
