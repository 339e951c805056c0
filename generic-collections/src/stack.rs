//! Last-in-first-out stack.

use crate::error::{CollectionError, Result};
use crate::list::DynamicList;

/// A LIFO stack backed by a [`DynamicList`].
///
/// # Example
///
/// ```
/// use generic_collections::Stack;
///
/// let mut cards = Stack::new();
/// cards.push("Jack");
/// cards.push("Ace");
/// cards.push("King");
///
/// assert_eq!(cards.pop(), Ok("King"));
/// assert_eq!(cards.peek(), Ok(&"Ace"));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: DynamicList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            items: DynamicList::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: DynamicList::with_capacity(capacity),
        }
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` on top. Amortized O(1).
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes and returns the most recently pushed value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop_last().ok_or(CollectionError::EmptyCollection)
    }

    /// Like [`Stack::pop`], returning `None` when empty.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        self.items.pop_last()
    }

    /// Returns the value [`Stack::pop`] would remove.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(CollectionError::EmptyCollection)
    }

    /// Iterates from top to bottom.
    #[inline]
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes values in iteration order; the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
