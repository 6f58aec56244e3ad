//! Request path enrichment for error responses.

use axum::{
    Json,
    extract::{OriginalUri, Request},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorBody, ErrorInfo};

/// Rewrites [`AppError`](crate::error::AppError) responses so that their
/// body names the request path that produced them.
///
/// Responses without an [`ErrorInfo`] extension pass through untouched.
///
/// ```json
/// { "error": { "code": "not_found", ..., "path": "/article/display" } }
/// ```
pub async fn error_path(OriginalUri(uri): OriginalUri, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let Some(info) = response.extensions().get::<ErrorInfo>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);

    let body = ErrorBody {
        error: ErrorInfo {
            path: Some(uri.path().to_owned()),
            ..info
        },
    };

    (parts, Json(body)).into_response()
}
