//! Article domain model.
//!
//! Mirrors the shape of the public article API. Only `id`, `title`,
//! `description` and `tag_list` take part in core logic; everything else is
//! carried through for presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Stable article identifier.
///
/// The API may hand out numeric or textual ids. The two are distinct:
/// `ArticleId::Number(42)` is not equal to `ArticleId::Text("42")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses user input: anything that reads as an integer becomes `Number`.
impl FromStr for ArticleId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => ArticleId::Number(n),
            Err(_) => ArticleId::Text(s.to_string()),
        })
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        ArticleId::Number(value)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        ArticleId::Text(value.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(value: String) -> Self {
        ArticleId::Text(value)
    }
}

/// Raw `tag_list` as delivered by the API.
///
/// The list endpoint sends an array, the detail endpoint a comma-joined
/// string. Anything else is kept as `Malformed` so one odd article never
/// breaks deserialization of a whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    Tags(Vec<String>),
    Joined(String),
    Malformed(Value),
}

impl Default for TagList {
    fn default() -> Self {
        TagList::Tags(Vec::new())
    }
}

impl TagList {
    /// Returns the tags as an ordered list of strings.
    ///
    /// A joined string is split on commas; pieces are trimmed and empty
    /// pieces dropped. A malformed value yields no tags.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            TagList::Tags(tags) => tags.clone(),
            TagList::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            TagList::Malformed(_) => Vec::new(),
        }
    }

    /// Check if the raw value had an unexpected shape
    pub fn is_malformed(&self) -> bool {
        matches!(self, TagList::Malformed(_))
    }
}

/// Article author as embedded in API responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub profile_image_90: Option<String>,
}

impl Author {
    /// Preferred avatar URL (small variant first).
    pub fn avatar(&self) -> Option<&str> {
        self.profile_image_90
            .as_deref()
            .or(self.profile_image.as_deref())
    }
}

/// A remotely sourced article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default)]
    pub tag_list: TagList,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub readable_publish_date: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub reading_time_minutes: Option<u32>,

    #[serde(default)]
    pub public_reactions_count: u64,

    #[serde(default)]
    pub comments_count: u64,

    /// Rendered body, only present on the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(default)]
    pub user: Option<Author>,

    /// Remaining API fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    /// Creates an article with only the fields the core logic looks at.
    pub fn new(
        id: impl Into<ArticleId>,
        title: impl Into<String>,
        description: impl Into<String>,
        tag_list: TagList,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            tag_list,
            url: None,
            cover_image: None,
            readable_publish_date: None,
            published_at: None,
            reading_time_minutes: None,
            public_reactions_count: 0,
            comments_count: 0,
            body_html: None,
            user: None,
            extra: Map::new(),
        }
    }

    /// Normalized tags.
    pub fn tags(&self) -> Vec<String> {
        self.tag_list.normalize()
    }

    /// The first `limit` normalized tags, for card previews.
    pub fn preview_tags(&self, limit: usize) -> Vec<String> {
        let mut tags = self.tags();
        tags.truncate(limit);
        tags
    }

    /// Author display name with the "Unknown" fallback.
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or("Unknown")
    }

    /// In-app path of the detail view.
    pub fn detail_path(&self) -> String {
        format!("/article/{}", self.id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_tags_are_split_and_trimmed() {
        let tags = TagList::Joined("react, testing , ui".to_string());
        assert_eq!(tags.normalize(), vec!["react", "testing", "ui"]);
    }

    #[test]
    fn test_joined_tags_drop_empty_pieces() {
        let tags = TagList::Joined("rust,, ,web".to_string());
        assert_eq!(tags.normalize(), vec!["rust", "web"]);
    }

    #[test]
    fn test_malformed_tags_are_empty() {
        let tags = TagList::Malformed(serde_json::json!({"tag": "rust"}));
        assert!(tags.is_malformed());
        assert!(tags.normalize().is_empty());
    }

    #[test]
    fn test_tag_list_shapes_deserialize() {
        let list: TagList = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(list, TagList::Tags(vec!["a".into(), "b".into()]));

        let joined: TagList = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(joined, TagList::Joined("a, b".into()));

        let numbers: TagList = serde_json::from_str("[1, 2]").unwrap();
        assert!(numbers.is_malformed());

        let null: TagList = serde_json::from_str("null").unwrap();
        assert!(null.is_malformed());
    }

    #[test]
    fn test_article_id_number_and_text_are_distinct() {
        let number: ArticleId = serde_json::from_str("42").unwrap();
        let text: ArticleId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(number, ArticleId::Number(42));
        assert_eq!(text, ArticleId::Text("42".into()));
        assert_ne!(number, text);
    }

    #[test]
    fn test_article_id_from_str() {
        assert_eq!("1234".parse::<ArticleId>().unwrap(), ArticleId::Number(1234));
        assert_eq!(
            "my-post".parse::<ArticleId>().unwrap(),
            ArticleId::Text("my-post".into())
        );
        assert_eq!(" 42 ".parse::<ArticleId>().unwrap(), ArticleId::Number(42));
        assert_eq!(
            " my-post\n".parse::<ArticleId>().unwrap(),
            ArticleId::Text("my-post".into())
        );
    }

    #[test]
    fn test_article_deserializes_api_shape() {
        let raw = r#"{
            "id": 1905,
            "title": "Testing React apps",
            "description": null,
            "tag_list": ["react", "testing"],
            "cover_image": null,
            "readable_publish_date": "Mar 3",
            "published_at": "2024-03-03T10:00:00Z",
            "reading_time_minutes": 5,
            "public_reactions_count": 12,
            "comments_count": 3,
            "user": {"name": "Ada", "profile_image_90": "https://img/90.png"},
            "slug": "testing-react-apps"
        }"#;

        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.id, ArticleId::Number(1905));
        assert_eq!(article.description, "");
        assert_eq!(article.tags(), vec!["react", "testing"]);
        assert_eq!(article.reading_time_minutes, Some(5));
        assert_eq!(article.author_name(), "Ada");
        assert_eq!(article.user.as_ref().unwrap().avatar(), Some("https://img/90.png"));
        assert_eq!(article.extra["slug"], "testing-react-apps");
        assert_eq!(article.detail_path(), "/article/1905");
    }

    #[test]
    fn test_preview_tags_truncates() {
        let article = Article::new(1_i64, "t", "d", TagList::Joined("a,b,c,d".into()));
        assert_eq!(article.preview_tags(3), vec!["a", "b", "c"]);
        assert_eq!(article.preview_tags(10).len(), 4);
    }
}
