//! Growable, ordered list that permits duplicates.
//!
//! Lookup by value is a linear scan. When values have a natural unique key,
//! a [`Dictionary`](crate::Dictionary) or [`UniqueSet`](crate::UniqueSet)
//! answers membership in O(1) instead.

use crate::config::CollectionsConfig;
use crate::error::{CollectionError, Result, check_index};

/// An ordered, resizable sequence of `T`.
///
/// # Example
///
/// ```
/// use generic_collections::DynamicList;
///
/// let mut students = DynamicList::new();
/// students.append("John Smith");
/// students.append("John Smith"); // duplicates are allowed
///
/// // Check-before-add keeps the list unique
/// assert!(!students.append_unique("John Smith"));
/// assert_eq!(students.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicList<T> {
    items: Vec<T>,
}

impl<T> Default for DynamicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty list sized by [`CollectionsConfig::default_list_capacity`].
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if the capacity cannot be reserved
    /// for `T`.
    pub fn with_config(config: &CollectionsConfig) -> Result<Self> {
        let capacity = config.default_list_capacity();
        let mut items = Vec::new();
        items.try_reserve_exact(capacity).map_err(|e| {
            CollectionError::invalid_argument(format!("cannot reserve {capacity} list slots: {e}"))
        })?;
        if capacity > 0 {
            log::debug!("reserved {capacity} list slots");
        }
        Ok(Self { items })
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` at the end. Amortized O(1).
    #[inline]
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`](crate::CollectionError::IndexOutOfRange)
    /// if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self.items[index])
    }

    /// Returns the last value.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes and returns the last value.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Iterates values in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> DynamicList<T> {
    /// Linear scan for `value`. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Index of the first value equal to `value`. O(n).
    #[inline]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }

    /// Appends `value` only if no equal value is present. O(n).
    ///
    /// Returns `true` if the value was appended.
    pub fn append_unique(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes the first value equal to `value`, keeping the order of the rest.
    ///
    /// Returns `false` if no value matched.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T> Extend<T> for DynamicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for DynamicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
