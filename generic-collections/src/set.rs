//! Unordered set of distinct values.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// An unordered collection of distinct values.
///
/// Adding a value that is already present is a no-op. Iteration order is
/// unspecified and may change between insertions.
///
/// # Example
///
/// ```
/// use generic_collections::UniqueSet;
///
/// let mut students = UniqueSet::new();
/// assert!(students.add("Jane Doe"));
/// assert!(!students.add("Jane Doe"));
/// assert!(students.contains(&"Jane Doe"));
/// assert_eq!(students.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UniqueSet<T> {
    items: FxHashSet<T>,
}

impl<T> Default for UniqueSet<T> {
    fn default() -> Self {
        Self {
            items: FxHashSet::default(),
        }
    }
}

impl<T> UniqueSet<T> {
    /// Returns the number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates values in unspecified order.
    #[inline]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Eq + Hash> UniqueSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts `value`. Returns `false` if it was already present.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Membership test. O(1) expected.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Removes `value`. Returns `false` if it was absent.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }
}

impl<T: Eq + Hash> Extend<T> for UniqueSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for UniqueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
