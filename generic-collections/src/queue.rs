//! First-in-first-out queue.

use crate::error::{CollectionError, Result};
use crate::linked::{Iter, LinkedSequence};

/// A FIFO queue backed by a [`LinkedSequence`].
///
/// # Example
///
/// ```
/// use generic_collections::Queue;
///
/// let mut checkout_line = Queue::new();
/// checkout_line.enqueue("John");
/// checkout_line.enqueue("Jane");
/// checkout_line.enqueue("Sam");
///
/// assert_eq!(checkout_line.dequeue(), Ok("John"));
/// assert_eq!(checkout_line.peek(), Ok(&"Jane"));
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    items: LinkedSequence<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: LinkedSequence::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: LinkedSequence::with_capacity(capacity),
        }
    }

    /// Returns the number of queued values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` at the back. O(1).
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.items.append_back(value);
    }

    /// Removes and returns the earliest enqueued value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(CollectionError::EmptyCollection)
    }

    /// Like [`Queue::dequeue`], returning `None` when empty.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the value [`Queue::dequeue`] would remove.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyCollection`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(CollectionError::EmptyCollection)
    }

    /// Iterates from front (next out) to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
