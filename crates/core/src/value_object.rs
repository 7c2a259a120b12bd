//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity, are immutable once built and compare by their
/// attribute values. Two addresses with the same street, number, zip and city are the
/// same address.
///
/// Implementors validate at construction time, the same way entities do, so an
/// instance in hand is always well-formed.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
