use thiserror::Error;

use storefront_core::DomainError;

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Use case failure.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Validation, precondition, lookup or storage failure from the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An event handler failed after the write was committed.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl UseCaseError {
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            UseCaseError::Domain(e) => Some(e),
            UseCaseError::Handler(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UseCaseError::Domain(DomainError::NotFound { .. }))
    }
}
