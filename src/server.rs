//! HTTP server initialization and runtime setup.
//!
//! Selects the article store, wires the service, and runs the Axum server.

use crate::application::services::ArticleService;
use crate::config::Config;
use crate::domain::repositories::ArticleStore;
use crate::domain::validation::ValidationEngine;
use crate::infrastructure::persistence::{InMemoryArticleStore, PgArticleStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to PostgreSQL and applies the bootstrap migration.
///
/// # Errors
///
/// Returns an error if the connection or the migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Builds the application state for the configured store.
///
/// # Errors
///
/// Returns an error if a database is configured but unreachable.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (store, db): (Arc<dyn ArticleStore>, Option<Arc<PgPool>>) = match config.database_url {
        Some(ref url) => {
            let pool = Arc::new(connect_database(config, url).await?);
            let store: Arc<dyn ArticleStore> = Arc::new(PgArticleStore::new(pool.clone()));
            (store, Some(pool))
        }
        None => {
            tracing::warn!("No database configured, articles are kept in memory");
            let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
            (store, None)
        }
    };

    let article_service = Arc::new(ArticleService::new(store, ValidationEngine::new()));

    Ok(AppState::new(article_service, db))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
