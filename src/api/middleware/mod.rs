//! HTTP middleware for request processing.

pub mod error_path;
pub mod request_trace;

pub use error_path::error_path;
