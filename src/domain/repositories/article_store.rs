//! Store trait for article data access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::Article;
use crate::error::StoreError;

/// Storage interface for articles.
///
/// Each operation is atomic with respect to a single record. No ordering is
/// guaranteed for query results unless an implementation documents one.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryArticleStore`] - process-local store
/// - [`crate::infrastructure::persistence::PgArticleStore`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Persists a new article and returns it with a freshly generated id.
    ///
    /// Any id already present on `article` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn insert(&self, article: Article) -> Result<Article, StoreError>;

    /// Overwrites the record whose id matches `article.id` and returns the stored copy.
    ///
    /// Behaves as an upsert when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn save(&self, article: Article) -> Result<Article, StoreError>;

    /// Removes the record with the given id. Removing a missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Point lookup by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Article))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, StoreError>;

    /// All articles whose `authors` contain an element exactly equal to `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn find_by_authors(&self, name: &str) -> Result<Vec<Article>, StoreError>;

    /// All articles whose `keywords` contain an element exactly equal to `word`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn find_by_keywords(&self, word: &str) -> Result<Vec<Article>, StoreError>;

    /// All articles published in the half-open interval `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the underlying engine fails.
    async fn find_by_publish_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Article>, StoreError>;
}
