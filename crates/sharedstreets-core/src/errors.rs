//! Error types for sharedstreets-core.
//!
//! Every fallible operation in the core returns [`SharedStreetsResult`]. The core
//! never logs and never converts a failure into an empty identifier; callers
//! decide how to report errors.

use thiserror::Error;

/// Result alias used across the crate.
pub type SharedStreetsResult<T> = Result<T, SharedStreetsError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedStreetsError {
    /// A message could not be converted to its byte representation.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The caller passed input that cannot be canonicalized
    /// (empty geometry, unknown form of way, invalid base-58, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SharedStreetsError {
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Stable short code, suitable for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Encoding(_) => "encoding",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}
