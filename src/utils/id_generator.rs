//! Article identifier generation.
//!
//! Identifiers look like document-store object ids: 24 lowercase hex
//! characters derived from 12 random bytes.

/// Number of random bytes before hex encoding.
const ID_LENGTH_BYTES: usize = 12;

/// Generates a new random article identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_article_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
