//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are only ever observed in a valid state: constructors and factories run the
/// type's validator and refuse to hand out an instance when any rule fails.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync;

    /// Short, stable name of the entity type (`"customer"`, `"product"`).
    ///
    /// Used as the validation context and in not-found errors.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
