use chrono::{DateTime, Utc};

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **tagged** with a stable type name used to route them to handlers
/// - **timestamped** with the business time they occurred at
///
/// The implementing value is the payload; handlers receive it by reference.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name used for dispatch routing (e.g. `"ProductCreated"`).
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
