//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses. Field names of transported articles follow the domain model
//! (`id`, `header`, `shortDescription`, `text`, `publishDate`, `authors`,
//! `keywords`).
//!
//! # Modules
//!
//! - [`dto`] - Query parameter and response DTOs
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
