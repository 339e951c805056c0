//! Fixed-length array with checked positional access.
//!
//! The length is chosen once at construction and never changes. Every slot
//! starts out as `T::default()` until assigned.

use std::ops::{Index, IndexMut};

use crate::config::CollectionsConfig;
use crate::error::{CollectionError, Result, check_index};

/// A sequence of `T` with a length fixed at construction.
///
/// # Example
///
/// ```
/// use generic_collections::FixedArray;
///
/// let mut students: FixedArray<String> = FixedArray::new(20).unwrap();
/// students.set(0, "John Smith".into()).unwrap();
///
/// assert_eq!(students.len(), 20);
/// assert_eq!(students.find(&"John Smith".into()), Some(0));
/// assert!(students.get(20).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T> {
    slots: Box<[T]>,
}

impl<T: Default> FixedArray<T> {
    /// Allocates `len` default-initialized slots.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `len` exceeds the default
    /// [`CollectionsConfig::max_fixed_len`].
    pub fn new(len: usize) -> Result<Self> {
        Self::with_config(len, &CollectionsConfig::default())
    }

    /// Allocates `len` default-initialized slots, bounded by `config`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `len` exceeds
    /// [`CollectionsConfig::max_fixed_len`] or cannot be allocated for `T`.
    pub fn with_config(len: usize, config: &CollectionsConfig) -> Result<Self> {
        if len > config.max_fixed_len() {
            return Err(CollectionError::invalid_argument(format!(
                "array length {} exceeds limit {}",
                len,
                config.max_fixed_len()
            )));
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|e| {
            CollectionError::invalid_argument(format!("cannot allocate {len} array slots: {e}"))
        })?;
        log::debug!("allocating fixed array of {len} slots");
        slots.resize_with(len, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Allocates from a signed length, as read from user input.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `len` is negative or exceeds
    /// the limit in `config`.
    pub fn from_signed_len(len: i64, config: &CollectionsConfig) -> Result<Self> {
        let len = usize::try_from(len).map_err(|_| {
            CollectionError::invalid_argument(format!("array length must not be negative, got {len}"))
        })?;
        Self::with_config(len, config)
    }
}

impl<T> FixedArray<T> {
    /// Returns the fixed length.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array has zero slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len())?;
        Ok(&self.slots[index])
    }

    /// Returns the value at `index` mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len())?;
        Ok(&mut self.slots[index])
    }

    /// Overwrites the slot at `index`, returning its previous value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Iterates slots in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Iterates slots mutably in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }

    /// Borrows the slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T: Clone> FixedArray<T> {
    /// Sets every slot to `value`.
    pub fn fill(&mut self, value: T) {
        self.slots.fill(value);
    }
}

impl<T: PartialEq> FixedArray<T> {
    /// Index of the first slot equal to `value`. O(n).
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.positions(value).next()
    }

    /// Lazily yields the index of every slot equal to `value`.
    pub fn positions<'a>(&'a self, value: &'a T) -> impl Iterator<Item = usize> + 'a {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| *slot == value)
            .map(|(i, _)| i)
    }
}

impl<T> Index<usize> for FixedArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`FixedArray::get`] for a checked read.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for FixedArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
