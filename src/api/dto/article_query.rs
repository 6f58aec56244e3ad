//! Query parameter DTOs for the article endpoints.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::validation::not_blank;
use crate::error::AppError;

/// `?articleId=...` for display and delete.
#[derive(Debug, Deserialize, Validate)]
pub struct ArticleIdQuery {
    #[serde(rename = "articleId")]
    #[validate(custom(function = "not_blank", message = "The article id must not be blank"))]
    pub article_id: String,
}

/// `?author=...` for `listForAuthor`.
#[derive(Debug, Deserialize, Validate)]
pub struct AuthorQuery {
    #[validate(custom(function = "not_blank", message = "The author must not be blank"))]
    pub author: String,
}

/// `?keyword=...` for `findByKeyword`.
#[derive(Debug, Deserialize, Validate)]
pub struct KeywordQuery {
    #[validate(custom(function = "not_blank", message = "The keyword must not be blank"))]
    pub keyword: String,
}

/// `?from=...&to=...` for `listForPeriod`, both in epoch milliseconds.
///
/// `from` is included, `to` is excluded.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub from: i64,
    pub to: i64,
}

impl PeriodQuery {
    /// Converts both bounds to timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if a bound is outside the representable range.
    pub fn range(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
        Ok((to_timestamp("from", self.from)?, to_timestamp("to", self.to)?))
    }
}

fn to_timestamp(name: &str, millis: i64) -> Result<DateTime<Utc>, AppError> {
    Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        AppError::bad_request(
            format!("Invalid timestamp for '{name}': {millis}"),
            "The given parameters are incomplete or invalid.",
        )
    })
}
