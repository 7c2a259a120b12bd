//! Validators and their per-type selection.

use crate::error::DomainResult;
use crate::notification::Notification;

/// Rule check for one entity type.
///
/// Implementations inspect the candidate's fields and record every failing rule; they never
/// return early and never raise.
pub trait Validator<T: ?Sized> {
    fn validate(&self, candidate: &T) -> Notification;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> Notification,
{
    fn validate(&self, candidate: &T) -> Notification {
        self(candidate)
    }
}

/// Binds an entity type to the one validator used for it.
///
/// The binding is resolved at compile time, so swapping validation strategy means
/// changing `Validator` here; entity constructors keep calling [`ensure_valid`].
pub trait Validatable: Sized {
    type Validator: Validator<Self> + Default;

    fn validator() -> Self::Validator {
        Self::Validator::default()
    }
}

/// Run the bound validator and hand the candidate back if no rule failed.
///
/// On failure the candidate is dropped and the caller gets one aggregated
/// [`DomainError::Validation`](crate::DomainError::Validation).
pub fn ensure_valid<T: Validatable>(candidate: T) -> DomainResult<T> {
    T::validator().validate(&candidate).into_result()?;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[derive(Debug)]
    struct Widget {
        name: String,
        size: i32,
    }

    #[derive(Default)]
    struct WidgetValidator;

    impl Validator<Widget> for WidgetValidator {
        fn validate(&self, candidate: &Widget) -> Notification {
            let mut n = Notification::new();
            if candidate.name.is_empty() {
                n.add("widget", "Name is required");
            }
            if candidate.size <= 0 {
                n.add("widget", "Size must be greater than zero");
            }
            n
        }
    }

    impl Validatable for Widget {
        type Validator = WidgetValidator;
    }

    #[test]
    fn ensure_valid_returns_candidate_when_rules_pass() {
        let w = ensure_valid(Widget { name: "w".into(), size: 3 }).unwrap();
        assert_eq!(w.name, "w");
        assert_eq!(w.size, 3);
    }

    #[test]
    fn ensure_valid_reports_all_failures_at_once() {
        let err = ensure_valid(Widget { name: String::new(), size: 0 }).unwrap_err();
        match err {
            DomainError::Validation(errors) => {
                let messages: Vec<_> = errors.messages().collect();
                assert_eq!(messages, vec!["Name is required", "Size must be greater than zero"]);
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn closures_can_act_as_validators() {
        let only_named = |w: &Widget| {
            let mut n = Notification::new();
            if w.name.is_empty() {
                n.add("widget", "Name is required");
            }
            n
        };

        let n = only_named.validate(&Widget { name: String::new(), size: -1 });
        assert_eq!(n.errors().len(), 1);
    }
}
