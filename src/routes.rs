//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`     - Health check: store reachability (public)
//! - `/article/*`       - Article API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::request_trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/article", api::routes::article_routes())
        .with_state(state)
        .layer(request_trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
