//! Article creation, update, deletion and query service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::entities::Article;
use crate::domain::repositories::ArticleStore;
use crate::domain::validation::ValidationEngine;
use crate::error::AppError;

/// Service for managing articles.
///
/// Validates new articles before they reach the store and enforces that
/// updated or deleted articles exist. Store failures are passed through
/// unchanged as [`AppError::Store`].
///
/// # Concurrency
///
/// `update` and `delete` read the article and then mutate it in a separate
/// store call. Two concurrent callers may both observe the article before
/// either mutation lands; the service does not guard against this.
pub struct ArticleService<S: ArticleStore + ?Sized = dyn ArticleStore> {
    store: Arc<S>,
    validation: ValidationEngine,
}

impl<S: ArticleStore + ?Sized> ArticleService<S> {
    /// Creates a new article service.
    pub fn new(store: Arc<S>, validation: ValidationEngine) -> Self {
        Self { store, validation }
    }

    /// Validates and stores a new article.
    ///
    /// The returned article carries the id generated by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first required field that is
    /// blank or missing; the store is not called in that case.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn create(&self, article: Article) -> Result<Article, AppError> {
        debug!(header = %article.header, "Creating new article");

        self.validation.validate(&article)?;

        Ok(self.store.insert(article).await?)
    }

    /// Replaces every field of an existing article except its id.
    ///
    /// Only existence is checked. The payload is not validated, so an update
    /// may store blank fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article has no id or no article
    /// with this id exists.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn update(&self, article: Article) -> Result<Article, AppError> {
        let id = article.id().unwrap_or_default().to_owned();
        debug!(id = %id, "Updating existing article");

        if id.is_empty() || self.store.find_by_id(&id).await?.is_none() {
            return Err(AppError::not_found(id));
        }

        Ok(self.store.save(article).await?)
    }

    /// Deletes an article and returns it as it was before deletion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article with this id exists.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn delete(&self, id: &str) -> Result<Article, AppError> {
        debug!(id = %id, "Deleting existing article");

        let article = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id))?;

        self.store.delete_by_id(id).await?;

        Ok(article)
    }

    /// Retrieves an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article with this id exists.
    /// Returns [`AppError::Store`] on store failures.
    pub async fn find_by_id(&self, id: &str) -> Result<Article, AppError> {
        let article = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id))?;

        debug!(id = %id, "Displaying article");
        Ok(article)
    }

    /// All articles listing `name` among their authors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store failures.
    pub async fn find_by_author(&self, name: &str) -> Result<Vec<Article>, AppError> {
        debug!(author = %name, "Listing articles for author");
        Ok(self.store.find_by_authors(name).await?)
    }

    /// All articles published in `[from, to)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store failures.
    pub async fn find_by_publish_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Article>, AppError> {
        debug!(%from, %to, "Listing articles for period");
        Ok(self.store.find_by_publish_date_between(from, to).await?)
    }

    /// All articles tagged with `word`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store failures.
    pub async fn find_by_keyword(&self, word: &str) -> Result<Vec<Article>, AppError> {
        debug!(keyword = %word, "Listing articles for keyword");
        Ok(self.store.find_by_keywords(word).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockArticleStore;
    use crate::error::StoreError;
    use chrono::TimeZone;

    fn create_test_article() -> Article {
        Article::new(
            "header1111",
            "A short description of the article",
            "Here it comes - the actual article",
            Utc.timestamp_millis_opt(1_547_733_791_804).unwrap(),
            vec!["author1".to_string(), "author2".to_string()],
            vec!["keyword1".to_string()],
        )
    }

    fn service(store: MockArticleStore) -> ArticleService<MockArticleStore> {
        ArticleService::new(Arc::new(store), ValidationEngine::new())
    }

    #[tokio::test]
    async fn test_create_success_returns_generated_id() {
        let mut store = MockArticleStore::new();
        store
            .expect_insert()
            .withf(|article| article.id.is_none() && article.header == "header1111")
            .times(1)
            .returning(|article| Ok(article.with_id("5c40b0f1a7b11b0001e1d9a1")));

        let created = service(store).create(create_test_article()).await.unwrap();

        assert_eq!(created.id(), Some("5c40b0f1a7b11b0001e1d9a1"));
        assert_eq!(Article { id: None, ..created }, create_test_article());
    }

    #[tokio::test]
    async fn test_create_invalid_never_reaches_store() {
        let mut store = MockArticleStore::new();
        store.expect_insert().times(0);

        let article = Article {
            header: String::new(),
            ..create_test_article()
        };
        let err = service(store).create(article).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.to_string(), "header: The header must not be blank.");
    }

    #[tokio::test]
    async fn test_create_passes_store_failure_through() {
        let mut store = MockArticleStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(store).create(create_test_article()).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut))
        ));
    }

    #[tokio::test]
    async fn test_update_existing_article() {
        let mut store = MockArticleStore::new();
        let existing = create_test_article().with_id("a1");
        store
            .expect_find_by_id()
            .withf(|id| id == "a1")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_save()
            .withf(|article| article.header == "header3333")
            .times(1)
            .returning(Ok);

        let changed = Article {
            header: "header3333".to_string(),
            ..create_test_article().with_id("a1")
        };
        let updated = service(store).update(changed).await.unwrap();

        assert_eq!(updated.id(), Some("a1"));
        assert_eq!(updated.header, "header3333");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut store = MockArticleStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));
        store.expect_save().times(0);

        let err = service(store)
            .update(create_test_article().with_id("unknown"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { ref id } if id == "unknown"));
    }

    #[tokio::test]
    async fn test_update_without_id_is_not_found() {
        let mut store = MockArticleStore::new();
        store.expect_find_by_id().times(0);
        store.expect_save().times(0);

        let err = service(store)
            .update(create_test_article())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_does_not_validate_payload() {
        // Known gap: an update may overwrite a valid article with blank fields.
        let mut store = MockArticleStore::new();
        let existing = create_test_article().with_id("a1");
        store
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store.expect_save().times(1).returning(Ok);

        let blank = Article {
            header: String::new(),
            authors: vec![],
            ..create_test_article().with_id("a1")
        };
        let updated = service(store).update(blank).await.unwrap();

        assert_eq!(updated.header, "");
        assert!(updated.authors.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let mut store = MockArticleStore::new();
        let existing = create_test_article().with_id("d1");
        let expected = existing.clone();
        store
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_delete_by_id()
            .withf(|id| id == "d1")
            .times(1)
            .returning(|_| Ok(()));

        let deleted = service(store).delete("d1").await.unwrap();

        assert_eq!(deleted, expected);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut store = MockArticleStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));
        store.expect_delete_by_id().times(0);

        let err = service(store).delete("nope").await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut store = MockArticleStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));

        let err = service(store)
            .find_by_id("1234567890ABCDEFG")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Article not found: 1234567890ABCDEFG");
    }

    #[tokio::test]
    async fn test_queries_pass_through() {
        let mut store = MockArticleStore::new();
        let article = create_test_article().with_id("q1");
        let by_author = vec![article.clone()];
        store
            .expect_find_by_authors()
            .withf(|name| name == "author1")
            .times(1)
            .returning(move |_| Ok(by_author.clone()));
        store
            .expect_find_by_keywords()
            .withf(|word| word == "missing")
            .times(1)
            .returning(|_| Ok(vec![]));
        store
            .expect_find_by_publish_date_between()
            .withf(|from, to| from < to)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = service(store);

        assert_eq!(service.find_by_author("author1").await.unwrap(), vec![article]);
        assert!(service.find_by_keyword("missing").await.unwrap().is_empty());
        assert!(
            service
                .find_by_publish_date_between(
                    Utc.with_ymd_and_hms(2018, 12, 24, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2019, 1, 3, 0, 0, 0).unwrap(),
                )
                .await
                .unwrap()
                .is_empty()
        );
    }

    fn timed_out() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    fn is_timed_out(err: &AppError) -> bool {
        matches!(
            err,
            AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut))
        )
    }

    #[tokio::test]
    async fn test_find_by_id_passes_store_failure_through() {
        let mut store = MockArticleStore::new();
        store
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(timed_out()));

        let err = service(store).find_by_id("a1").await.unwrap_err();

        assert!(is_timed_out(&err));
    }

    #[tokio::test]
    async fn test_update_lookup_failure_skips_save() {
        let mut store = MockArticleStore::new();
        store
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(timed_out()));
        store.expect_save().times(0);

        let err = service(store)
            .update(create_test_article().with_id("a1"))
            .await
            .unwrap_err();

        assert!(is_timed_out(&err));
    }

    #[tokio::test]
    async fn test_update_passes_save_failure_through() {
        let mut store = MockArticleStore::new();
        let existing = create_test_article().with_id("a1");
        store
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(StoreError::Corrupted("article a1 has a NULL author".into())));

        let err = service(store)
            .update(create_test_article().with_id("a1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Store(StoreError::Corrupted(_))));
    }

    #[tokio::test]
    async fn test_delete_lookup_failure_skips_delete() {
        let mut store = MockArticleStore::new();
        store
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(timed_out()));
        store.expect_delete_by_id().times(0);

        let err = service(store).delete("d1").await.unwrap_err();

        assert!(is_timed_out(&err));
    }

    #[tokio::test]
    async fn test_delete_passes_delete_failure_through() {
        let mut store = MockArticleStore::new();
        let existing = create_test_article().with_id("d1");
        store
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Err(timed_out()));

        let err = service(store).delete("d1").await.unwrap_err();

        assert!(is_timed_out(&err));
    }

    #[tokio::test]
    async fn test_query_failures_pass_through() {
        let mut store = MockArticleStore::new();
        store
            .expect_find_by_authors()
            .times(1)
            .returning(|_| Err(timed_out()));
        store
            .expect_find_by_keywords()
            .times(1)
            .returning(|_| Err(timed_out()));
        store
            .expect_find_by_publish_date_between()
            .times(1)
            .returning(|_, _| Err(timed_out()));

        let service = service(store);
        let now = Utc::now();

        assert!(is_timed_out(&service.find_by_author("author1").await.unwrap_err()));
        assert!(is_timed_out(&service.find_by_keyword("keyword1").await.unwrap_err()));
        assert!(is_timed_out(
            &service
                .find_by_publish_date_between(now, now)
                .await
                .unwrap_err()
        ));
    }
}
