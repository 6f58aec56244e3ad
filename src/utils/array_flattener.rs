//! Flattening of arbitrarily nested integer arrays.
//!
//! `[[1,2,[3]],4]` becomes `[1,2,3,4]`. Elements that are neither arrays nor
//! integers are skipped.

use serde_json::Value;

/// Errors that can occur when flattening a JSON document.
#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON array at the top level")]
    NotAnArray,
}

/// Flattens nested arrays into their integer leaves.
///
/// Traversal is depth-first, left to right. Arrays are descended into,
/// integers (numbers representable as `i64`) are kept, and every other value
/// (strings, floats, booleans, null, objects) is dropped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use news_articles::utils::array_flattener::flatten;
///
/// let input = json!([[1, 2, [3]], 4, "Not an Integer!"]);
/// assert_eq!(flatten(input.as_array().unwrap()), vec![1, 2, 3, 4]);
/// ```
pub fn flatten(input: &[Value]) -> Vec<i64> {
    let mut result = Vec::new();
    flatten_into(input, &mut result);
    result
}

fn flatten_into(elements: &[Value], result: &mut Vec<i64>) {
    for element in elements {
        match element {
            Value::Array(nested) => flatten_into(nested, result),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    result.push(value);
                }
            }
            _ => {}
        }
    }
}

/// Parses `text` as a JSON array and flattens it.
///
/// # Errors
///
/// Returns [`FlattenError::InvalidJson`] if `text` is not valid JSON and
/// [`FlattenError::NotAnArray`] if the top-level value is not an array.
pub fn flatten_json(text: &str) -> Result<Vec<i64>, FlattenError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(elements) => Ok(flatten(&elements)),
        _ => Err(FlattenError::NotAnArray),
    }
}
