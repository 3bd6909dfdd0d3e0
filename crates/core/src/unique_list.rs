//! Ordered collection that rejects identity duplicates.

use crate::entity::Identity;
use crate::error::{DomainError, DomainResult};

/// An insertion-ordered list in which no two elements share an identity.
///
/// Uniqueness is decided by [`Identity::same_identity`], which may be weaker
/// than `PartialEq`. Every mutating operation either succeeds completely or
/// leaves the list untouched.
///
/// Callers only ever see a read-only view ([`as_slice`](Self::as_slice),
/// [`iter`](Self::iter)); the backing `Vec` is never handed out mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `items`, failing if any two collide.
    pub fn from_vec(items: Vec<T>) -> DomainResult<Self> {
        let mut list = Self::new();
        list.replace_all(items)?;
        Ok(list)
    }

    /// Returns true if an element with the same identity as `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Appends `item`.
    ///
    /// Fails with [`DomainError::DuplicateEntity`] if an element with the same
    /// identity already exists.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(&item) {
            return Err(DomainError::DuplicateEntity);
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces the element matching `target` with `replacement`, in place.
    ///
    /// The replacement may keep the target's identity; it must not collide
    /// with any *other* element.
    pub fn set_element(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        let index = self.position(target).ok_or(DomainError::ElementNotFound)?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_identity(&replacement));
        if collides {
            return Err(DomainError::DuplicateEntity);
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Removes the first element matching `item` and returns it.
    pub fn remove(&mut self, item: &T) -> DomainResult<T> {
        let index = self.position(item).ok_or(DomainError::ElementNotFound)?;
        Ok(self.items.remove(index))
    }

    /// Replaces the whole backing sequence.
    ///
    /// Fails with [`DomainError::DuplicateElements`] if `items` contains two
    /// mutually colliding entries; the current contents are kept in that case.
    pub fn replace_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        if !Self::elements_are_unique(&items) {
            return Err(DomainError::DuplicateElements);
        }
        self.items = items;
        Ok(())
    }

    /// Returns true if no two elements of `items` share an identity.
    pub fn elements_are_unique(items: &[T]) -> bool {
        items.iter().enumerate().all(|(i, a)| {
            items[i + 1..].iter().all(|b| !a.same_identity(b))
        })
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.same_identity(item))
    }
}

impl<T> UniqueList<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Identity is the key; the payload only matters for full equality.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Keyed {
        key: u8,
        payload: u8,
    }

    impl Identity for Keyed {
        fn same_identity(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn keyed(key: u8, payload: u8) -> Keyed {
        Keyed { key, payload }
    }

    #[test]
    fn add_rejects_same_identity_with_different_payload() {
        let mut list = UniqueList::new();
        list.add(keyed(1, 10)).unwrap();

        let err = list.add(keyed(1, 99)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntity);
        assert_eq!(list.as_slice(), &[keyed(1, 10)]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = UniqueList::new();
        for key in [3, 1, 2] {
            list.add(keyed(key, 0)).unwrap();
        }
        let keys: Vec<u8> = list.iter().map(|k| k.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn set_element_keeps_position() {
        let mut list = UniqueList::from_vec(vec![keyed(1, 0), keyed(2, 0), keyed(3, 0)]).unwrap();
        list.set_element(&keyed(2, 0), keyed(7, 5)).unwrap();
        assert_eq!(list.as_slice(), &[keyed(1, 0), keyed(7, 5), keyed(3, 0)]);
    }

    #[test]
    fn set_element_allows_same_identity_replacement() {
        let mut list = UniqueList::from_vec(vec![keyed(1, 0)]).unwrap();
        list.set_element(&keyed(1, 0), keyed(1, 42)).unwrap();
        assert_eq!(list.as_slice(), &[keyed(1, 42)]);
    }

    #[test]
    fn set_element_rejects_collision_with_other_element() {
        let mut list = UniqueList::from_vec(vec![keyed(1, 0), keyed(2, 0)]).unwrap();
        let err = list.set_element(&keyed(1, 0), keyed(2, 9)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateEntity);
        assert_eq!(list.as_slice(), &[keyed(1, 0), keyed(2, 0)]);
    }

    #[test]
    fn set_element_missing_target() {
        let mut list = UniqueList::from_vec(vec![keyed(1, 0)]).unwrap();
        let err = list.set_element(&keyed(5, 0), keyed(6, 0)).unwrap_err();
        assert_eq!(err, DomainError::ElementNotFound);
    }

    #[test]
    fn remove_matches_by_identity() {
        let mut list = UniqueList::from_vec(vec![keyed(1, 0), keyed(2, 3)]).unwrap();
        let removed = list.remove(&keyed(2, 0)).unwrap();
        assert_eq!(removed, keyed(2, 3));
        assert_eq!(list.len(), 1);
        assert_eq!(list.remove(&keyed(2, 0)).unwrap_err(), DomainError::ElementNotFound);
    }

    #[test]
    fn replace_all_rejects_internal_duplicates_and_keeps_contents() {
        let mut list = UniqueList::from_vec(vec![keyed(9, 9)]).unwrap();
        let err = list.replace_all(vec![keyed(1, 0), keyed(1, 1)]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateElements);
        assert_eq!(list.as_slice(), &[keyed(9, 9)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever sequence of adds is attempted, the list never
        /// holds two elements with the same identity.
        #[test]
        fn adds_never_produce_duplicates(
            attempts in prop::collection::vec((0u8..16, any::<u8>()), 0..64)
        ) {
            let mut list = UniqueList::new();
            for (key, payload) in attempts {
                let _ = list.add(keyed(key, payload));
            }
            prop_assert!(UniqueList::elements_are_unique(list.as_slice()));
        }
    }
}
