//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, missing elements). IO concerns belong to the storage layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation; the payload is the constraint message.
    #[error("{0}")]
    Validation(String),

    /// An element with the same identity is already stored.
    #[error("operation would result in duplicate entities")]
    DuplicateEntity,

    /// No stored element matches the requested identity.
    #[error("element not found")]
    ElementNotFound,

    /// A bulk replacement contained two mutually colliding elements.
    #[error("replacement list contains duplicate elements")]
    DuplicateElements,

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
