//! Error types for circles-core.

use thiserror::Error;

/// Errors raised by circles-core.
///
/// Traversal itself is total: unknown neighbor names, an empty input set or a
/// zero circle cap degrade to smaller results instead of failing. Only the
/// selection of a filter by name and configuration loading can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested filter does not name a known filter variant.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration could not be extracted or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Friend records could not be parsed from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for circles-core operations.
pub type Result<T> = std::result::Result<T, Error>;
