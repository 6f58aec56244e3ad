//! Article entity, the single content type managed by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use validator::Validate;

/// A news article.
///
/// An article without an `id` (or with an empty one) has not been stored yet.
/// The store assigns the identifier exactly once on insert; updates never
/// regenerate it.
///
/// Fields are public so that transport layers can deserialize incomplete
/// payloads; absent and `null` fields both fall back to their empty value.
/// Completeness is enforced by
/// [`ValidationEngine`](crate::domain::validation::ValidationEngine) before a
/// create reaches the store.
///
/// `publishDate` travels as epoch milliseconds on the wire.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, alias = "articleId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "The header must not be blank"
    ))]
    pub header: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "The short description must not be blank"
    ))]
    pub short_description: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(custom(
        function = "crate::domain::validation::not_blank",
        message = "The text must not be blank"
    ))]
    pub text: String,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    #[validate(required(message = "The publish date must be set"))]
    pub publish_date: Option<DateTime<Utc>>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one author must be set"))]
    pub authors: Vec<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one keyword must be set"))]
    pub keywords: Vec<String>,
}

impl Article {
    /// Creates an unsaved article from all of its required fields.
    pub fn new(
        header: impl Into<String>,
        short_description: impl Into<String>,
        text: impl Into<String>,
        publish_date: DateTime<Utc>,
        authors: Vec<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            header: header.into(),
            short_description: short_description.into(),
            text: text.into(),
            publish_date: Some(publish_date),
            authors,
            keywords,
        }
    }

    /// Returns the same article carrying the given identifier.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Returns the identifier if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns true once the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id().is_some()
    }

    /// Returns true if `name` is one of the authors (exact match).
    pub fn has_author(&self, name: &str) -> bool {
        self.authors.iter().any(|author| author == name)
    }

    /// Returns true if `word` is one of the keywords (exact match).
    pub fn has_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword == word)
    }

    /// Returns true if the publish date lies in the half-open range `[from, to)`.
    ///
    /// Articles without a publish date never match.
    pub fn is_published_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.publish_date
            .is_some_and(|published| published >= from && published < to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Article {
        Article::new(
            "Header",
            "Short",
            "Body",
            Utc.with_ymd_and_hms(2019, 1, 2, 0, 0, 0).unwrap(),
            vec!["author1".to_string(), "author2".to_string()],
            vec!["keyword1".to_string()],
        )
    }

    #[test]
    fn test_new_article_is_unsaved() {
        let article = sample();
        assert!(article.id.is_none());
        assert!(!article.is_persisted());
    }

    #[test]
    fn test_empty_id_is_unsaved() {
        let article = sample().with_id("");
        assert!(!article.is_persisted());
        assert_eq!(article.id(), None);
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let article = sample().with_id("abc");
        assert_eq!(article.id(), Some("abc"));
        assert_eq!(article.header, "Header");
        assert_eq!(article.authors.len(), 2);
    }

    #[test]
    fn test_has_author_is_exact() {
        let article = sample();
        assert!(article.has_author("author1"));
        assert!(!article.has_author("author"));
        assert!(!article.has_author("Author1"));
        assert!(!article.has_author("author12"));
    }

    #[test]
    fn test_has_keyword_is_exact() {
        let article = sample();
        assert!(article.has_keyword("keyword1"));
        assert!(!article.has_keyword("keyword"));
    }

    #[test]
    fn test_published_between_is_half_open() {
        let article = sample();
        let jan2 = Utc.with_ymd_and_hms(2019, 1, 2, 0, 0, 0).unwrap();
        let jan3 = Utc.with_ymd_and_hms(2019, 1, 3, 0, 0, 0).unwrap();
        let jan1 = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();

        assert!(article.is_published_between(jan2, jan3));
        assert!(article.is_published_between(jan1, jan3));
        assert!(!article.is_published_between(jan1, jan2));
    }

    #[test]
    fn test_unpublished_never_matches_range() {
        let article = Article {
            publish_date: None,
            ..sample()
        };
        assert!(!article.is_published_between(DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_json_field_names_and_millis() {
        let article = sample().with_id("id-1");
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["id"], "id-1");
        assert_eq!(json["shortDescription"], "Short");
        assert_eq!(json["publishDate"], 1_546_387_200_000_i64);
        assert_eq!(json["authors"][1], "author2");
    }

    #[test]
    fn test_deserialize_incomplete_payload() {
        let article: Article = serde_json::from_str(
            r#"{"articleId": "x1", "text": "body", "publishDate": 1547733791804}"#,
        )
        .unwrap();

        assert_eq!(article.id(), Some("x1"));
        assert_eq!(article.header, "");
        assert!(article.authors.is_empty());
        assert_eq!(
            article.publish_date.map(|d| d.timestamp_millis()),
            Some(1_547_733_791_804)
        );
    }

    #[test]
    fn test_deserialize_null_fields_as_empty() {
        let article: Article = serde_json::from_str(
            r#"{"id": null, "header": null, "shortDescription": null, "text": null,
                "publishDate": null, "authors": null, "keywords": null}"#,
        )
        .unwrap();

        assert_eq!(article, Article::default());
    }
}
