//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete article stores.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL store implementations

pub mod persistence;
