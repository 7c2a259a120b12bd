//! Domain error model.

use thiserror::Error;

use crate::notification::NotificationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Every failure collected during one validation pass, in the order it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<NotificationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<NotificationError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[NotificationError] {
        &self.0
    }

    /// Messages only, without their contexts.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<NotificationError> {
        self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, e) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            core::fmt::Display::fmt(e, f)?;
        }
        Ok(())
    }
}

/// Domain-level error.
///
/// `Validation` and `Precondition` are the two domain channels and are never merged:
/// construction funnels rule failures through a notification and reports them all at
/// once, while business methods refuse a single operation with one message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more validation rules failed while constructing or changing an entity.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A business method was invoked on an entity lacking required state.
    #[error("{0}")]
    Precondition(String),

    /// A requested entity was not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The entity already exists (e.g. duplicate create).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store could not serve the request.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(errors: Vec<NotificationError>) -> Self {
        Self::Validation(ValidationErrors::new(errors))
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Validation failures carried by this error, if it is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
