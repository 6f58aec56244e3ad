#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use news_articles::api::handlers::health_handler;
use news_articles::api::routes::article_routes;
use news_articles::application::services::ArticleService;
use news_articles::domain::repositories::ArticleStore;
use news_articles::domain::validation::ValidationEngine;
use news_articles::infrastructure::persistence::InMemoryArticleStore;
use news_articles::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

/// 2019-01-10T00:00:00Z
pub const JAN_10: i64 = 1_547_078_400_000;
/// 2019-01-14T00:00:00Z
pub const JAN_14: i64 = 1_547_424_000_000;

pub fn create_test_state() -> AppState {
    let store: Arc<dyn ArticleStore> = Arc::new(InMemoryArticleStore::new());
    let article_service = Arc::new(ArticleService::new(store, ValidationEngine::new()));

    AppState::new(article_service, None)
}

pub fn make_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/article", article_routes())
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}

pub fn article_json(
    header: &str,
    publish_date: i64,
    authors: &[&str],
    keywords: &[&str],
) -> Value {
    json!({
        "header": header,
        "shortDescription": "A short description of the article",
        "text": "Here it comes - the actual article",
        "publishDate": publish_date,
        "authors": authors,
        "keywords": keywords,
    })
}

/// Five articles published daily from Jan 10 to Jan 14 2019.
///
/// `author6` wrote three of them, three are tagged `keywordx`.
pub async fn seed_articles(server: &TestServer) {
    let day = 86_400_000;
    let articles = [
        article_json("header1111", JAN_10, &["author1", "author2", "author6"], &["keyword1", "keywordx"]),
        article_json("header2222", JAN_10 + day, &["author1", "author2", "author6"], &["keyword1", "keywordx"]),
        article_json("header3333", JAN_10 + 2 * day, &["author1", "author2", "author3"], &["keyword1", "keyword2"]),
        article_json("header4444", JAN_10 + 3 * day, &["author1", "author2", "author6"], &["keyword1", "keyword2"]),
        article_json("header5555", JAN_14, &["author1", "author2", "author3"], &["keyword1", "keywordx"]),
    ];

    for article in &articles {
        server.post("/article/create").json(article).await.assert_status_ok();
    }
}
