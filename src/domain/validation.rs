//! Required-field validation for articles.
//!
//! The constraints themselves are declared on [`Article`] with `validator`.
//! Failures are reported one at a time: the first failing field in
//! [`FIELD_ORDER`] wins and the others are dropped.

use std::borrow::Cow;
use std::fmt;

use validator::{Validate, ValidationError};

use crate::domain::entities::Article;

/// Validated fields in reporting order, as `(struct field, wire name)`.
pub const FIELD_ORDER: &[(&str, &str)] = &[
    ("header", "header"),
    ("short_description", "shortDescription"),
    ("text", "text"),
    ("publish_date", "publishDate"),
    ("authors", "authors"),
    ("keywords", "keywords"),
];

/// A rejected article: the first field that violates its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Field name as exposed on the wire (e.g. `shortDescription`).
    pub field: &'static str,
    /// Human readable constraint message, without trailing period.
    pub message: Cow<'static, str>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}.", self.field, self.message)
    }
}

impl std::error::Error for ValidationFailure {}

/// Rejects empty and whitespace-only strings.
///
/// # Errors
///
/// Returns a `blank` [`ValidationError`] for blank input.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Validates candidate articles before they are written.
///
/// Stateless; cheap to construct and copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Returns the first violated constraint, or `Ok(())` if the article is complete.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] naming the first field (in the order header,
    /// shortDescription, text, publishDate, authors, keywords) whose constraint
    /// does not hold.
    pub fn validate(&self, article: &Article) -> Result<(), ValidationFailure> {
        let Err(errors) = article.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();

        let failure = FIELD_ORDER.iter().find_map(|&(key, field)| {
            let error = field_errors.get(key)?.first()?;
            Some(ValidationFailure {
                field,
                message: error.message.clone().unwrap_or_else(|| error.code.clone()),
            })
        });

        Err(failure.unwrap_or_else(|| ValidationFailure {
            field: "article",
            message: Cow::Owned(errors.to_string()),
        }))
    }
}
