//! Utility functions used across the application.
//!
//! - [`id_generator`] - Article identifier generation
//! - [`array_flattener`] - Depth-first flattening of nested integer arrays

pub mod array_flattener;
pub mod id_generator;
