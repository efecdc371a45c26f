//! Error types for instance and solution file handling.

use thiserror::Error;

/// Errors produced while loading instance or solution files.
///
/// The planning core itself is infallible: malformed roster data degrades to
/// "no zone" / "no group" at model build time. Only file IO and JSON parsing
/// can fail.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
