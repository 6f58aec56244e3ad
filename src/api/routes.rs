//! API route configuration.

use crate::api::handlers::{
    create_article_handler, delete_article_handler, display_article_handler,
    find_by_keyword_handler, list_for_author_handler, list_for_period_handler,
    update_article_handler,
};
use crate::api::middleware::error_path;
use crate::state::AppState;
use axum::{
    Router,
    middleware,
    routing::{delete, get, post, put},
};

/// Article routes, nested under `/article`.
///
/// # Endpoints
///
/// - `POST   /create`         - Store a new article
/// - `PUT    /update`         - Replace an existing article
/// - `DELETE /delete`         - Delete an article (`articleId`)
/// - `GET    /display`        - Show an article (`articleId`)
/// - `GET    /listForAuthor`  - Articles of an author (`author`)
/// - `GET    /listForPeriod`  - Articles published in `[from, to)` (epoch millis)
/// - `GET    /findByKeyword`  - Articles with a keyword (`keyword`)
///
/// Error bodies carry the full request path.
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_article_handler))
        .route("/update", put(update_article_handler))
        .route("/delete", delete(delete_article_handler))
        .route("/display", get(display_article_handler))
        .route("/listForAuthor", get(list_for_author_handler))
        .route("/listForPeriod", get(list_for_period_handler))
        .route("/findByKeyword", get(find_by_keyword_handler))
        .layer(middleware::from_fn(error_path))
}
