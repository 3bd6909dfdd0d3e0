//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: field types such
/// as a phone number or a tag, and records such as prescriptions that have no
/// narrower identity. To "modify" a value object, build a new one.
///
/// Every value object is also an [`Identity`](crate::Identity) whose predicate
/// is plain equality; see [`same_value`].
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Identity predicate for value objects: full-value equality.
pub fn same_value<T: ValueObject>(a: &T, b: &T) -> bool {
    a == b
}
