//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic domain failures only. The `Display` output of
/// `EntityValidation` is the bare message so callers can surface it as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity failed one of its validation rules.
    #[error("{0}")]
    EntityValidation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn entity_validation(msg: impl Into<String>) -> Self {
        Self::EntityValidation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// The human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::EntityValidation(msg) | DomainError::InvalidId(msg) => msg,
        }
    }
}
