//! PostgreSQL implementation of the article store.
//!
//! Articles live in a single `articles` table. Authors and keywords are
//! `TEXT[]` columns so that element membership can be matched exactly with
//! `= ANY(...)`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::Article;
use crate::domain::repositories::ArticleStore;
use crate::error::StoreError;
use crate::utils::id_generator::generate_article_id;

const ARTICLE_COLUMNS: &str =
    "id, header, short_description, text, publish_date, authors, keywords";

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    header: String,
    short_description: String,
    text: String,
    publish_date: Option<DateTime<Utc>>,
    authors: Vec<Option<String>>,
    keywords: Vec<Option<String>>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = StoreError;

    /// Rejects rows without an id and arrays holding `NULL` elements.
    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        if row.id.trim().is_empty() {
            return Err(StoreError::Corrupted("article row without id".to_string()));
        }

        let authors = non_null(&row.id, "author", row.authors)?;
        let keywords = non_null(&row.id, "keyword", row.keywords)?;

        Ok(Article {
            id: Some(row.id),
            header: row.header,
            short_description: row.short_description,
            text: row.text,
            publish_date: row.publish_date,
            authors,
            keywords,
        })
    }
}

fn non_null(id: &str, kind: &str, values: Vec<Option<String>>) -> Result<Vec<String>, StoreError> {
    values
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| StoreError::Corrupted(format!("article {id} has a NULL {kind}")))
}

fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>, StoreError> {
    rows.into_iter().map(Article::try_from).collect()
}

/// PostgreSQL store for articles.
///
/// Query results are ordered by publish date, then id.
pub struct PgArticleStore {
    pool: Arc<PgPool>,
}

impl PgArticleStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Counts stored articles.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    /// Upserts `article` under `id` and returns the stored row.
    async fn write(&self, id: String, article: Article) -> Result<Article, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO articles (id, header, short_description, text, publish_date, authors, keywords)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                header = EXCLUDED.header,
                short_description = EXCLUDED.short_description,
                text = EXCLUDED.text,
                publish_date = EXCLUDED.publish_date,
                authors = EXCLUDED.authors,
                keywords = EXCLUDED.keywords
            RETURNING {ARTICLE_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .bind(article.header)
            .bind(article.short_description)
            .bind(article.text)
            .bind(article.publish_date)
            .bind(article.authors)
            .bind(article.keywords)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_into()
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn insert(&self, article: Article) -> Result<Article, StoreError> {
        self.write(generate_article_id(), article).await
    }

    async fn save(&self, article: Article) -> Result<Article, StoreError> {
        let id = article
            .id()
            .map(str::to_owned)
            .unwrap_or_else(generate_article_id);
        self.write(id, article).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>, StoreError> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_authors(&self, name: &str) -> Result<Vec<Article>, StoreError> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE $1 = ANY(authors) ORDER BY publish_date, id"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(name)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_articles(rows)
    }

    async fn find_by_keywords(&self, word: &str) -> Result<Vec<Article>, StoreError> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE $1 = ANY(keywords) ORDER BY publish_date, id"
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(word)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_articles(rows)
    }

    async fn find_by_publish_date_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Article>, StoreError> {
        let sql = format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE publish_date >= $1 AND publish_date < $2
            ORDER BY publish_date, id
            "#
        );

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(from)
            .bind(to)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_articles(rows)
    }
}
