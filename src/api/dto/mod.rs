//! Data Transfer Objects for API requests and responses.
//!
//! Articles are transported as [`crate::domain::entities::Article`] directly.
//! Query parameter DTOs use Serde for deserialization and validator for input
//! validation.

pub mod article_query;
pub mod health;
