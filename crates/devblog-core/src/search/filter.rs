//! Search filter over an in-memory article list.

use crate::article::Article;

/// A search term applied to loaded articles.
///
/// The term is volatile view state; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
    needle: String,
}

impl SearchFilter {
    /// Creates a filter for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        let term = term.into();
        let needle = term.to_lowercase();
        Self { term, needle }
    }

    /// The term as typed by the user.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// An empty term matches everything.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Replaces the term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        *self = Self::new(term);
    }

    /// Resets the term to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if the term is a case-insensitive substring of the
    /// title, the description or any normalized tag.
    pub fn matches(&self, article: &Article) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        contains(&article.title, &self.needle)
            || contains(&article.description, &self.needle)
            || article
                .tag_list
                .normalize()
                .iter()
                .any(|tag| contains(tag, &self.needle))
    }

    /// Borrows the matching articles, preserving their relative order.
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Returns the articles matching `term`, in their original order.
///
/// An empty term returns the input unchanged. A malformed `tag_list`
/// contributes no tags and never fails the filter.
pub fn filter_articles(term: &str, articles: &[Article]) -> Vec<Article> {
    SearchFilter::new(term)
        .apply(articles)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ArticleId, TagList};

    fn sample() -> Vec<Article> {
        vec![
            Article::new(
                1_i64,
                "Understanding Lifetimes",
                "A gentle tour",
                TagList::Tags(vec!["rust".into(), "beginners".into()]),
            ),
            Article::new(
                2_i64,
                "CSS Grid in Practice",
                "Layouts that TEST well",
                TagList::Tags(vec!["css".into()]),
            ),
            Article::new(
                3_i64,
                "Component patterns",
                "Hooks and friends",
                TagList::Joined("react, testing , ui".into()),
            ),
            Article::new(
                4_i64,
                "Odd payload",
                "tags came in as an object",
                TagList::Malformed(serde_json::json!({"name": "testing"})),
            ),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let articles = sample();
        assert_eq!(filter_articles("", &articles), articles);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let articles = sample();
        let result = filter_articles("lifetimes", &articles);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Understanding Lifetimes");
    }

    #[test]
    fn test_matches_description_and_joined_tags() {
        let articles = sample();
        let ids: Vec<_> = filter_articles("test", &articles)
            .into_iter()
            .map(|a| a.id)
            .collect();
        // 2 via description, 3 via the joined tag "testing"; 4 has malformed tags
        assert_eq!(ids, vec![ArticleId::Number(2), ArticleId::Number(3)]);
    }

    #[test]
    fn test_malformed_tags_do_not_match_or_fail() {
        let articles = sample();
        let result = filter_articles("object", &articles);
        assert_eq!(result.len(), 1);
        assert!(result[0].tag_list.is_malformed());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let articles = sample();
        assert!(filter_articles("haskell", &articles).is_empty());
    }

    #[test]
    fn test_single_article_inclusion_matches_predicate() {
        let article = Article::new(
            9_i64,
            "Title",
            "Description",
            TagList::Tags(vec!["WebDev".into()]),
        );
        for term in ["tit", "DESC", "webd", "e"] {
            assert_eq!(filter_articles(term, std::slice::from_ref(&article)).len(), 1);
        }
        for term in ["xyz", "title!", "webdev2"] {
            assert!(filter_articles(term, std::slice::from_ref(&article)).is_empty());
        }
    }

    #[test]
    fn test_whitespace_term_is_not_empty() {
        let articles = vec![
            Article::new(1_i64, "Two words", "", TagList::default()),
            Article::new(2_i64, "One", "word", TagList::Tags(vec!["tag".into()])),
            Article::new(3_i64, "Single", "", TagList::Joined("has space, x".into())),
        ];

        let filter = SearchFilter::new(" ");
        assert!(!filter.is_empty());
        let ids: Vec<_> = filter.apply(&articles).into_iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids, vec![ArticleId::Number(1), ArticleId::Number(3)]);
    }

    #[test]
    fn test_set_term_and_clear() {
        let mut filter = SearchFilter::new("Rust");
        assert_eq!(filter.term(), "Rust");
        filter.set_term("CSS");
        assert_eq!(filter.apply(&sample()).len(), 1);
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }
}
