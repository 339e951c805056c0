//! Doubly-linked sequence with arena-backed nodes.
//!
//! Nodes live in a [`slab::Slab`] owned by the sequence and link to each
//! other through `u32` slot indices. Appending returns a [`NodeRef`] handle;
//! holding on to it allows O(1) removal or insertion next to that node later,
//! regardless of where it sits in the sequence.
//!
//! # Handle Validation
//!
//! A [`NodeRef`] records the sequence that issued it and the generation of
//! the node it points at. Operations reject handles from another sequence,
//! and handles whose node has been removed (even if the slot has since been
//! reused), with [`CollectionError::InvalidReference`].
//!
//! # Example
//!
//! ```
//! use generic_collections::LinkedSequence;
//!
//! let mut names = LinkedSequence::new();
//! let john = names.append_back("john");
//! let jake = names.append_back("jake");
//! names.append_back("jane");
//!
//! // O(1) removal from the middle
//! assert_eq!(names.remove_node(jake), Ok("jake"));
//!
//! // Insert next to a node we hold a handle to
//! names.insert_after(john, "chris").unwrap();
//!
//! let order: Vec<_> = names.iter().copied().collect();
//! assert_eq!(order, ["john", "chris", "jane"]);
//! ```

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;

use crate::error::{CollectionError, Result};
use crate::key::Key;

static NEXT_SEQUENCE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a node in a [`LinkedSequence`].
///
/// Handles are cheap to copy and stay valid until their node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    owner: u64,
    slot: u32,
    generation: u32,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: u32,
    next: u32,
    generation: u32,
}

/// An ordered sequence of nodes with forward and backward links.
///
/// There is no positional indexing. Traversal starts from either end, or
/// from a node the caller holds a [`NodeRef`] to.
#[derive(Debug)]
pub struct LinkedSequence<T> {
    id: u64,
    nodes: Slab<Node<T>>,
    head: u32,
    tail: u32,
    generation: u32,
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Slab::with_capacity(capacity),
            head: u32::NONE,
            tail: u32::NONE,
            generation: 0,
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the sequence has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle to the first node.
    #[inline]
    pub fn front_node(&self) -> Option<NodeRef> {
        self.head.get().map(|slot| self.handle(slot))
    }

    /// Handle to the last node.
    #[inline]
    pub fn back_node(&self) -> Option<NodeRef> {
        self.tail.get().map(|slot| self.handle(slot))
    }

    /// Returns the first value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.get().map(|slot| &self.nodes[slot.as_usize()].value)
    }

    /// Returns the last value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.get().map(|slot| &self.nodes[slot.as_usize()].value)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value at the back. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the sequence already holds `u32::MAX` nodes.
    pub fn append_back(&mut self, value: T) -> NodeRef {
        let slot = self.allocate(value);
        self.link_back(slot);
        self.handle(slot)
    }

    /// Prepends a value at the front. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the sequence already holds `u32::MAX` nodes.
    pub fn append_front(&mut self, value: T) -> NodeRef {
        let slot = self.allocate(value);
        self.link_front(slot);
        self.handle(slot)
    }

    /// Inserts a value directly after `node`. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidReference`] if `node` is not in this sequence.
    pub fn insert_after(&mut self, node: NodeRef, value: T) -> Result<NodeRef> {
        let after = self.resolve(node)?;
        let slot = self.allocate(value);
        self.link_after(after, slot);
        Ok(self.handle(slot))
    }

    /// Inserts a value directly before `node`. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidReference`] if `node` is not in this sequence.
    pub fn insert_before(&mut self, node: NodeRef, value: T) -> Result<NodeRef> {
        let before = self.resolve(node)?;
        let slot = self.allocate(value);
        self.link_before(before, slot);
        Ok(self.handle(slot))
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes `node`, relinking its neighbours, and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidReference`] if `node` was issued by another
    /// sequence or has already been removed.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<T> {
        let slot = self.resolve(node)?;
        Ok(self.release(slot))
    }

    /// Removes and returns the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head.get()?;
        Some(self.release(slot))
    }

    /// Removes and returns the last value.
    pub fn pop_back(&mut self) -> Option<T> {
        let slot = self.tail.get()?;
        Some(self.release(slot))
    }

    /// Removes every node. Outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = u32::NONE;
        self.tail = u32::NONE;
    }

    // ========================================================================
    // Access and navigation
    // ========================================================================

    /// Returns `true` if `node` refers to a live node of this sequence.
    #[inline]
    pub fn contains_node(&self, node: NodeRef) -> bool {
        self.lookup(node).is_some()
    }

    /// Returns the value at `node`.
    pub fn get(&self, node: NodeRef) -> Result<&T> {
        let slot = self.resolve(node)?;
        Ok(&self.nodes[slot.as_usize()].value)
    }

    /// Returns the value at `node` mutably.
    pub fn get_mut(&mut self, node: NodeRef) -> Result<&mut T> {
        let slot = self.resolve(node)?;
        Ok(&mut self.nodes[slot.as_usize()].value)
    }

    /// Handle to the node after `node`, or `None` at the back.
    pub fn next(&self, node: NodeRef) -> Result<Option<NodeRef>> {
        let slot = self.resolve(node)?;
        Ok(self.nodes[slot.as_usize()]
            .next
            .get()
            .map(|next| self.handle(next)))
    }

    /// Handle to the node before `node`, or `None` at the front.
    pub fn prev(&self, node: NodeRef) -> Result<Option<NodeRef>> {
        let slot = self.resolve(node)?;
        Ok(self.nodes[slot.as_usize()]
            .prev
            .get()
            .map(|prev| self.handle(prev)))
    }

    /// Iterates values front to back. Use `.rev()` to walk from the back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Iterates node handles front to back.
    ///
    /// Collect the handles first if you plan to remove nodes while walking.
    #[inline]
    pub fn node_refs(&self) -> NodeRefs<'_, T> {
        NodeRefs {
            sequence: self,
            current: self.head,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn allocate(&mut self, value: T) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        let entry = self.nodes.vacant_entry();
        let Some(slot) = u32::from_usize(entry.key()) else {
            panic!("linked sequence exceeds u32 slot space");
        };
        entry.insert(Node {
            value,
            prev: u32::NONE,
            next: u32::NONE,
            generation: self.generation,
        });
        slot
    }

    #[inline]
    fn handle(&self, slot: u32) -> NodeRef {
        NodeRef {
            owner: self.id,
            slot,
            generation: self.nodes[slot.as_usize()].generation,
        }
    }

    fn lookup(&self, node: NodeRef) -> Option<u32> {
        if node.owner != self.id {
            return None;
        }
        self.nodes
            .get(node.slot.as_usize())
            .filter(|n| n.generation == node.generation)
            .map(|_| node.slot)
    }

    fn resolve(&self, node: NodeRef) -> Result<u32> {
        self.lookup(node).ok_or_else(|| {
            log::trace!("sequence {} rejected stale or foreign {:?}", self.id, node);
            CollectionError::InvalidReference
        })
    }

    fn release(&mut self, slot: u32) -> T {
        self.unlink(slot);
        self.nodes.remove(slot.as_usize()).value
    }

    fn link_back(&mut self, slot: u32) {
        let node = &mut self.nodes[slot.as_usize()];
        node.prev = self.tail;
        node.next = u32::NONE;

        if self.tail.is_some() {
            self.nodes[self.tail.as_usize()].next = slot;
        } else {
            self.head = slot;
        }
        self.tail = slot;
    }

    fn link_front(&mut self, slot: u32) {
        let node = &mut self.nodes[slot.as_usize()];
        node.next = self.head;
        node.prev = u32::NONE;

        if self.head.is_some() {
            self.nodes[self.head.as_usize()].prev = slot;
        } else {
            self.tail = slot;
        }
        self.head = slot;
    }

    fn link_after(&mut self, after: u32, slot: u32) {
        let next = self.nodes[after.as_usize()].next;
        let node = &mut self.nodes[slot.as_usize()];
        node.prev = after;
        node.next = next;

        self.nodes[after.as_usize()].next = slot;
        if next.is_some() {
            self.nodes[next.as_usize()].prev = slot;
        } else {
            self.tail = slot;
        }
    }

    fn link_before(&mut self, before: u32, slot: u32) {
        let prev = self.nodes[before.as_usize()].prev;
        let node = &mut self.nodes[slot.as_usize()];
        node.next = before;
        node.prev = prev;

        self.nodes[before.as_usize()].prev = slot;
        if prev.is_some() {
            self.nodes[prev.as_usize()].next = slot;
        } else {
            self.head = slot;
        }
    }

    fn unlink(&mut self, slot: u32) {
        let node = &self.nodes[slot.as_usize()];
        let (prev, next) = (node.prev, node.next);

        if prev.is_some() {
            self.nodes[prev.as_usize()].next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.nodes[next.as_usize()].prev = prev;
        } else {
            self.tail = prev;
        }
    }
}

impl<T: PartialEq> LinkedSequence<T> {
    /// Handle to the first node holding `value`. O(n).
    pub fn find(&self, value: &T) -> Option<NodeRef> {
        self.node_refs()
            .find(|&node| self.nodes[node.slot.as_usize()].value == *value)
    }

    /// Returns `true` if any node holds `value`. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { sequence: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over values, front to back.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front.as_usize()];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back.as_usize()];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over node handles, front to back.
pub struct NodeRefs<'a, T> {
    sequence: &'a LinkedSequence<T>,
    current: u32,
}

impl<T> Iterator for NodeRefs<'_, T> {
    type Item = NodeRef;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.current.get()?;
        self.current = self.sequence.nodes[slot.as_usize()].next;
        Some(self.sequence.handle(slot))
    }
}

/// Owning iterator, front to back.
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.sequence.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.sequence.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(seq: &LinkedSequence<u64>) -> Vec<u64> {
        seq.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let seq: LinkedSequence<u64> = LinkedSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.front().is_none());
        assert!(seq.back().is_none());
        assert!(seq.front_node().is_none());
    }

    #[test]
    fn append_back_keeps_order() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        seq.append_back(2);
        let c = seq.append_back(3);

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.front_node(), Some(a));
        assert_eq!(seq.back_node(), Some(c));
        assert_eq!(values(&seq), vec![1, 2, 3]);
    }

    #[test]
    fn append_front_reverses_order() {
        let mut seq = LinkedSequence::new();
        seq.append_front(1);
        seq.append_front(2);
        seq.append_front(3);

        assert_eq!(values(&seq), vec![3, 2, 1]);
        assert_eq!(seq.front(), Some(&3));
        assert_eq!(seq.back(), Some(&1));
    }

    #[test]
    fn remove_middle_relinks_neighbours() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        let b = seq.append_back(2);
        let c = seq.append_back(3);

        assert_eq!(seq.remove_node(b), Ok(2));
        assert_eq!(values(&seq), vec![1, 3]);
        assert_eq!(seq.next(a), Ok(Some(c)));
        assert_eq!(seq.prev(c), Ok(Some(a)));
    }

    #[test]
    fn remove_head_and_tail() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        let b = seq.append_back(2);
        let c = seq.append_back(3);

        assert_eq!(seq.remove_node(a), Ok(1));
        assert_eq!(seq.front_node(), Some(b));
        assert_eq!(seq.remove_node(c), Ok(3));
        assert_eq!(seq.back_node(), Some(b));
        assert_eq!(seq.remove_node(b), Ok(2));
        assert!(seq.is_empty());
        assert!(seq.front_node().is_none());
        assert!(seq.back_node().is_none());
    }

    #[test]
    fn double_remove_is_invalid_reference() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);

        assert_eq!(seq.remove_node(a), Ok(1));
        assert_eq!(seq.remove_node(a), Err(CollectionError::InvalidReference));
    }

    #[test]
    fn stale_handle_after_slot_reuse() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        seq.remove_node(a).unwrap();

        // Slab hands the same slot back out
        let b = seq.append_back(2);
        assert_ne!(a, b);
        assert!(!seq.contains_node(a));
        assert_eq!(seq.get(a), Err(CollectionError::InvalidReference));
        assert_eq!(seq.get(b), Ok(&2));
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut first = LinkedSequence::new();
        let mut second = LinkedSequence::new();
        let a = first.append_back(1);
        second.append_back(1);

        assert_eq!(second.remove_node(a), Err(CollectionError::InvalidReference));
        assert_eq!(second.len(), 1);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn insert_after_and_before() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        let c = seq.append_back(3);

        seq.insert_after(a, 2).unwrap();
        seq.insert_before(a, 0).unwrap();
        let d = seq.insert_after(c, 4).unwrap();

        assert_eq!(values(&seq), vec![0, 1, 2, 3, 4]);
        assert_eq!(seq.back_node(), Some(d));
    }

    #[test]
    fn insert_next_to_removed_node_fails() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        seq.remove_node(a).unwrap();

        assert_eq!(seq.insert_after(a, 2), Err(CollectionError::InvalidReference));
        assert!(seq.is_empty());
    }

    #[test]
    fn pop_front_and_back() {
        let mut seq: LinkedSequence<u64> = (1..=4).collect();

        assert_eq!(seq.pop_front(), Some(1));
        assert_eq!(seq.pop_back(), Some(4));
        assert_eq!(values(&seq), vec![2, 3]);
        assert_eq!(seq.pop_front(), Some(2));
        assert_eq!(seq.pop_front(), Some(3));
        assert_eq!(seq.pop_front(), None);
        assert_eq!(seq.pop_back(), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(10);
        *seq.get_mut(a).unwrap() = 20;
        assert_eq!(seq.get(a), Ok(&20));
    }

    #[test]
    fn navigation_at_ends() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        let b = seq.append_back(2);

        assert_eq!(seq.prev(a), Ok(None));
        assert_eq!(seq.next(a), Ok(Some(b)));
        assert_eq!(seq.next(b), Ok(None));
    }

    #[test]
    fn iter_both_directions() {
        let seq: LinkedSequence<u64> = (1..=5).collect();

        let back: Vec<_> = seq.iter().rev().copied().collect();
        assert_eq!(back, vec![5, 4, 3, 2, 1]);

        let mut iter = seq.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn find_returns_first_match() {
        let mut seq = LinkedSequence::new();
        seq.append_back("john");
        let jake = seq.append_back("jake");
        seq.append_back("jake");

        assert_eq!(seq.find(&"jake"), Some(jake));
        assert!(seq.contains(&"john"));
        assert!(seq.find(&"joe").is_none());
    }

    #[test]
    fn node_refs_track_order() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        let b = seq.append_back(2);
        let c = seq.append_front(0);

        let refs: Vec<_> = seq.node_refs().collect();
        assert_eq!(refs, vec![c, a, b]);
    }

    #[test]
    fn clear_invalidates_handles() {
        let mut seq = LinkedSequence::new();
        let a = seq.append_back(1);
        seq.append_back(2);

        seq.clear();
        assert!(seq.is_empty());
        assert!(!seq.contains_node(a));

        seq.append_back(3);
        assert_eq!(values(&seq), vec![3]);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let seq: LinkedSequence<u64> = (1..=3).collect();
        let drained: Vec<_> = seq.into_iter().collect();
        assert_eq!(drained, vec![1, 2, 3]);
    }

    #[test]
    fn removal_leaves_remaining_handles_valid() {
        let mut seq = LinkedSequence::with_capacity(64);
        let handles: Vec<_> = (0..64u64).map(|i| seq.append_back(i)).collect();

        for h in handles.iter().step_by(2) {
            seq.remove_node(*h).unwrap();
        }

        for (i, h) in handles.iter().enumerate() {
            if i % 2 == 0 {
                assert!(!seq.contains_node(*h));
            } else {
                assert_eq!(seq.get(*h), Ok(&(i as u64)));
            }
        }
        assert_eq!(seq.len(), 32);
    }
}
