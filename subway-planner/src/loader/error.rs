//! Network loading error types.

use crate::domain::DomainError;

/// Errors that can occur while loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The input is not valid JSON, or has fields of the wrong type
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well-formed but not a network description
    #[error("invalid subway data format: {0}")]
    InvalidFormat(&'static str),

    /// The network breaks a domain invariant
    #[error("invalid network: {0}")]
    Domain(#[from] DomainError),
}
