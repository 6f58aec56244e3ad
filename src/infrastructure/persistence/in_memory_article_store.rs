//! In-memory article store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Article;
use crate::domain::repositories::ArticleStore;
use crate::error::StoreError;
use crate::utils::id_generator::generate_article_id;

/// A process-local article store.
///
/// Keeps articles in insertion order; query results follow that order.
/// Every operation holds the lock for its whole duration, so each one is
/// atomic with respect to a single record.
///
/// # Use Cases
///
/// - Development without PostgreSQL (`DATABASE_URL` unset)
/// - Handler and service tests
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory article store");
        Self {
            articles: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored articles.
    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    /// Returns true if no article is stored.
    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Article>
    where
        F: Fn(&Article) -> bool,
    {
        self.articles
            .read()
            .await
            .iter()
            .filter(|&article| predicate(article))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, article: Article) -> Result<Article, StoreError> {
        let stored = article.with_id(generate_article_id());
        self.articles.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn save(&self, article: Article) -> Result<Article, StoreError> {
        let stored = match article.id() {
            Some(_) => article,
            None => article.with_id(generate_article_id()),
        };

        let mut articles = self.articles.write().await;
        match articles.iter().position(|a| a.id == stored.id) {
            Some(index) => articles[index] = stored.clone(),
            None => articles.push(stored.clone()),
        }

        Ok(stored)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.articles
            .write()
            .await
            .retain(|article| article.id() != Some(id));
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, StoreError> {
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|article| article.id() == Some(id))
            .cloned())
    }

    async fn find_by_authors(&self, name: &str) -> Result<Vec<Article>, StoreError> {
        Ok(self.filter(|article| article.has_author(name)).await)
    }

    async fn find_by_keywords(&self, word: &str) -> Result<Vec<Article>, StoreError> {
        Ok(self.filter(|article| article.has_keyword(word)).await)
    }

    async fn find_by_publish_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Article>, StoreError> {
        Ok(self
            .filter(|article| article.is_published_between(from, to))
            .await)
    }
}
