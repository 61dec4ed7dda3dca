//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only structural failures live here. Per-field fallbacks (e.g. a quantity
/// that is not numeric) are part of the normal result and never surface as
/// an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Pasted text did not have the expected tabular shape.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A location code was blank after normalization.
    #[error("invalid location code: {0}")]
    InvalidLocation(String),
}

impl DomainError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn invalid_location(msg: impl Into<String>) -> Self {
        Self::InvalidLocation(msg.into())
    }

    /// True for failures the user should fix by re-copying the spreadsheet.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}
