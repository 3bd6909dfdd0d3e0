//! Entity traits: identity + continuity across edits.

/// Identity predicate used by [`UniqueList`](crate::UniqueList) to detect duplicates.
///
/// Two values may differ in their data fields and still denote the same
/// record (e.g. a patient whose address changed). Collections use this
/// predicate, never `PartialEq`, to decide whether an element is already
/// stored. Records without a narrower notion of identity implement it as
/// full-value equality.
pub trait Identity {
    fn same_identity(&self, other: &Self) -> bool;
}

/// Entity marker + minimal interface.
///
/// Entities expose a key derived purely from their immutable identity fields.
/// Their [`Identity`] implementation compares keys.
pub trait Entity: Identity {
    /// Identity key type.
    type Key: Eq + core::fmt::Debug;

    /// Returns the identity key.
    fn identity_key(&self) -> Self::Key;
}
