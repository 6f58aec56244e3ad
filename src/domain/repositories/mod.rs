//! Storage trait definitions for the domain layer.
//!
//! The traits here abstract the persistence engine. They are implemented by
//! concrete stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Stores
//!
//! - [`ArticleStore`] - Article CRUD operations and the author, keyword and period queries

pub mod article_store;

pub use article_store::ArticleStore;

#[cfg(test)]
pub use article_store::MockArticleStore;
