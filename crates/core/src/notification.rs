//! Notification: collect validation failures instead of failing fast.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A single recorded failure.
///
/// `context` names what was being validated (usually the entity type, e.g. `"product"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationError {
    pub context: String,
    pub message: String,
}

impl NotificationError {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl core::fmt::Display for NotificationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}

/// Ordered, append-only accumulator of validation failures.
///
/// One notification covers one validation pass. Validators return a fresh notification
/// rather than mutating state owned by the entity, so the result of a pass is just a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<NotificationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure. Duplicates are kept.
    pub fn add_error(&mut self, error: NotificationError) {
        self.errors.push(error);
    }

    /// Shorthand for `add_error(NotificationError::new(context, message))`.
    pub fn add(&mut self, context: &str, message: &str) {
        self.add_error(NotificationError::new(context, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[NotificationError] {
        &self.errors
    }

    /// Render failures as `"<context>: <message>"` joined by `", "`.
    ///
    /// With `Some(context)` only failures recorded under that context are included.
    pub fn messages(&self, context: Option<&str>) -> String {
        self.errors
            .iter()
            .filter(|e| context.is_none_or(|c| e.context == c))
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Merge another pass into this one (e.g. a value object validated inside an entity).
    pub fn extend(&mut self, other: Notification) {
        self.errors.extend(other.errors);
    }

    /// `Ok(())` when empty, otherwise the aggregated validation error.
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(self.errors))
        }
    }
}
