use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;

use crate::domain::validation::ValidationFailure;

/// JSON error response: `{"error": {...}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Client-facing error description. Never carries technical details.
///
/// `path` is filled in by [`crate::api::middleware::error_path`] once the
/// request URI is known.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: &'static str,
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Failures raised by an [`ArticleStore`](crate::domain::repositories::ArticleStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored record that cannot be mapped back to an article.
    #[error("Corrupted article record: {0}")]
    Corrupted(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An article failed a required-field constraint.
    #[error("{field}: {message}.")]
    Validation {
        field: &'static str,
        message: Cow<'static, str>,
    },

    /// No article with this id exists.
    #[error("Article not found: {id}")]
    NotFound { id: String },

    /// Malformed request payload or parameters.
    #[error("{message}")]
    BadRequest {
        message: String,
        details: &'static str,
    },

    /// Store failure, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn bad_request(message: impl Into<String>, details: &'static str) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    /// Returns true for [`AppError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`AppError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    fn status_and_code(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::Validation { .. } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "The given data is incomplete or invalid.",
            ),
            AppError::BadRequest { details, .. } => {
                (StatusCode::BAD_REQUEST, "bad_request", *details)
            }
            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                "not_found",
                "No article with this id found in database.",
            ),
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Storage failure.",
            ),
        }
    }

    /// Builds the client-facing description of this error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, details) = self.status_and_code();
        let message = match self {
            AppError::Store(_) => "Internal storage error".to_string(),
            other => other.to_string(),
        };

        ErrorInfo {
            code,
            message,
            details,
            timestamp: Utc::now(),
            path: None,
        }
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        AppError::Validation {
            field: failure.field,
            message: failure.message,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_keys().collect();
        fields.sort_unstable();

        AppError::bad_request(
            format!("Invalid parameters: {}", fields.join(", ")),
            "The given parameters are incomplete or invalid.",
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _, _) = self.status_and_code();

        if let AppError::Store(ref e) = self {
            tracing::error!(error = %e, "Store operation failed");
        }

        let info = self.to_error_info();
        let mut response = (
            status,
            Json(ErrorBody {
                error: info.clone(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(info);
        response
    }
}
