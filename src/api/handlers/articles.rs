//! Handlers for the article endpoints.
//!
//! Request bodies and query strings are extracted as `Result`s so that
//! malformed input is reported in the same error format as domain failures.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use validator::Validate;

use crate::api::dto::article_query::{ArticleIdQuery, AuthorQuery, KeywordQuery, PeriodQuery};
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;

const INVALID_JSON: &str = "The given data is no valid Json.";
const INVALID_PARAMETERS: &str = "The given parameters are incomplete or invalid.";

fn json_body(payload: Result<Json<Article>, JsonRejection>) -> Result<Article, AppError> {
    payload
        .map(|Json(article)| article)
        .map_err(|rejection| AppError::bad_request(rejection.body_text(), INVALID_JSON))
}

fn query_params<T: Validate>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    let Query(params) =
        query.map_err(|rejection| AppError::bad_request(rejection.body_text(), INVALID_PARAMETERS))?;
    params.validate()?;
    Ok(params)
}

/// Stores a new article.
///
/// # Endpoint
///
/// `POST /article/create`
///
/// The response contains the generated `id`.
///
/// # Errors
///
/// Returns 400 Bad Request if the article is incomplete or the JSON is malformed.
pub async fn create_article_handler(
    State(state): State<AppState>,
    payload: Result<Json<Article>, JsonRejection>,
) -> Result<Json<Article>, AppError> {
    let article = json_body(payload)?;
    let created = state.article_service.create(article).await?;
    tracing::info!(id = ?created.id, "Article created");
    Ok(Json(created))
}

/// Replaces an existing article, identified by its `id`.
///
/// # Endpoint
///
/// `PUT /article/update`
///
/// # Errors
///
/// Returns 404 Not Found if no article with this id exists.
/// Returns 400 Bad Request if the JSON is malformed.
pub async fn update_article_handler(
    State(state): State<AppState>,
    payload: Result<Json<Article>, JsonRejection>,
) -> Result<Json<Article>, AppError> {
    let article = json_body(payload)?;
    Ok(Json(state.article_service.update(article).await?))
}

/// Deletes an article and returns it as it was before deletion.
///
/// # Endpoint
///
/// `DELETE /article/delete?articleId={id}`
///
/// # Errors
///
/// Returns 404 Not Found if no article with this id exists.
pub async fn delete_article_handler(
    State(state): State<AppState>,
    query: Result<Query<ArticleIdQuery>, QueryRejection>,
) -> Result<Json<Article>, AppError> {
    let params = query_params(query)?;
    let deleted = state.article_service.delete(&params.article_id).await?;
    tracing::info!(id = %params.article_id, "Article deleted");
    Ok(Json(deleted))
}

/// Shows all details of an article.
///
/// # Endpoint
///
/// `GET /article/display?articleId={id}`
///
/// # Errors
///
/// Returns 404 Not Found if no article with this id exists.
pub async fn display_article_handler(
    State(state): State<AppState>,
    query: Result<Query<ArticleIdQuery>, QueryRejection>,
) -> Result<Json<Article>, AppError> {
    let params = query_params(query)?;
    Ok(Json(
        state.article_service.find_by_id(&params.article_id).await?,
    ))
}

/// Lists all articles of an author.
///
/// # Endpoint
///
/// `GET /article/listForAuthor?author={name}`
pub async fn list_for_author_handler(
    State(state): State<AppState>,
    query: Result<Query<AuthorQuery>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let params = query_params(query)?;
    Ok(Json(
        state.article_service.find_by_author(&params.author).await?,
    ))
}

/// Lists all articles published within a period.
///
/// # Endpoint
///
/// `GET /article/listForPeriod?from={millis}&to={millis}`
///
/// `from` is included, `to` is excluded.
pub async fn list_for_period_handler(
    State(state): State<AppState>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let Query(params) =
        query.map_err(|rejection| AppError::bad_request(rejection.body_text(), INVALID_PARAMETERS))?;
    let (from, to) = params.range()?;

    Ok(Json(
        state
            .article_service
            .find_by_publish_date_between(from, to)
            .await?,
    ))
}

/// Lists all articles tagged with a keyword.
///
/// # Endpoint
///
/// `GET /article/findByKeyword?keyword={word}`
pub async fn find_by_keyword_handler(
    State(state): State<AppState>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<Vec<Article>>, AppError> {
    let params = query_params(query)?;
    Ok(Json(
        state.article_service.find_by_keyword(&params.keyword).await?,
    ))
}
