//! Domain-level errors.
//!
//! These errors represent violated entity invariants. They are independent of
//! infrastructure concerns (HTTP, database, cache).

use thiserror::Error;

/// Domain-specific errors for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent
    #[error("{entity}.{field} is required")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl DomainError {
    /// Create a missing field error
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        DomainError::MissingField { entity, field }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
