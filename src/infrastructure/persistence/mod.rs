//! Article store implementations.
//!
//! # Stores
//!
//! - [`InMemoryArticleStore`] - Process-local store for development and tests
//! - [`PgArticleStore`] - PostgreSQL store using SQLx

pub mod in_memory_article_store;
pub mod pg_article_store;

pub use in_memory_article_store::InMemoryArticleStore;
pub use pg_article_store::PgArticleStore;
