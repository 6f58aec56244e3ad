//! Core domain entities representing the business data model.
//!
//! The service manages a single entity:
//!
//! - [`Article`] - A news article with header, texts, publish date, authors and keywords
//!
//! Articles are constructed with [`Article::new`], which takes every required
//! field. Transport layers may deserialize incomplete articles; those are
//! rejected by [`crate::domain::validation::ValidationEngine`] before any
//! create reaches the store.

pub mod article;

pub use article::Article;
