//! Application layer services implementing business logic.
//!
//! Services coordinate validation and store calls and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Article CRUD and queries

pub mod services;
