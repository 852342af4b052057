//! Domain failure taxonomy for employee operations.
//!
//! These errors are transport agnostic. The HTTP adapter pattern-matches on
//! [`EmployeeError::kind`] to pick a status code and body shape.

use super::ports::EmployeeRepositoryError;
use super::validation::ValidationErrors;

/// Discriminant of an [`EmployeeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The submission itself was absent.
    InvalidInput,
    /// No record exists for the requested identifier.
    NotFound,
    /// Submitted fields violate declared constraints.
    Validation,
    /// Anything else, typically a datastore failure.
    Unclassified,
}

/// Failure returned by the employee service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Unclassified(#[from] EmployeeRepositoryError),
}

impl EmployeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unclassified(_) => ErrorKind::Unclassified,
        }
    }

    /// Convenience constructor for [`ErrorKind::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
