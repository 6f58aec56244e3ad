//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod health;

pub use articles::{
    create_article_handler, delete_article_handler, display_article_handler,
    find_by_keyword_handler, list_for_author_handler, list_for_period_handler,
    update_article_handler,
};
pub use health::health_handler;
