//! Shared state injected into every HTTP handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ArticleService;

#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService>,
    /// PostgreSQL pool when articles are persisted in a database.
    pub db: Option<Arc<PgPool>>,
}

impl AppState {
    pub fn new(article_service: Arc<ArticleService>, db: Option<Arc<PgPool>>) -> Self {
        Self {
            article_service,
            db,
        }
    }
}
