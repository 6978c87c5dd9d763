//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures. Transport
/// concerns (status codes, response bodies) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An email address failed the syntactic format check.
    #[error("invalid email format")]
    InvalidEmail,
}

impl DomainError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}
