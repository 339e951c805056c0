//! Key-value dictionaries over a pluggable map backend.
//!
//! [`Dictionary`] implements the strict/lenient insert contracts once, on top
//! of any [`MapStore`]. The backend decides iteration order:
//!
//! ```text
//! Dictionary<K, V>          - FxHashMap backend, unspecified order
//! OrderedDictionary<K, V>   - BTreeMap backend, ascending key order
//! ```
//!
//! # Example
//!
//! ```
//! use generic_collections::{CollectionError, Dictionary};
//!
//! let mut students: Dictionary<u32, &str> = Dictionary::new();
//! students.add(134134, "John Smith").unwrap();
//! students.add(99999, "Jake Harrison").unwrap();
//!
//! // Strict insert refuses an existing key
//! assert_eq!(students.add(99999, "Jane Doe"), Err(CollectionError::DuplicateKey));
//! // The lenient variant reports it instead
//! assert!(!students.try_add(99999, "Jane Doe"));
//! // Indexed assignment overwrites
//! students.set(99999, "Jane Doe");
//! assert_eq!(students.get(&99999), Ok(&"Jane Doe"));
//! ```

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::error::{CollectionError, Result};

/// Map backend for [`Dictionary`].
///
/// # Implementations
///
/// - `HashMap<K, V, S>` (including `FxHashMap`) - unspecified iteration order
/// - `BTreeMap<K, V>` - ascending key order
pub trait MapStore<K, V>: Default {
    /// Iterator over entries in the backend's order.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns a reference to the value for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns a mutable reference to the value for `key`.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Inserts or overwrites, returning the previous value.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Inserts only if `key` is vacant. Returns `false` if it was occupied.
    fn insert_vacant(&mut self, key: K, value: V) -> bool;

    /// Removes and returns the value for `key`.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes every entry.
    fn clear(&mut self);

    /// Iterates entries.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V, S> MapStore<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        HashMap::get_mut(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    #[inline]
    fn insert_vacant(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

impl<K: Ord, V> MapStore<K, V> for BTreeMap<K, V> {
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        BTreeMap::get_mut(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    #[inline]
    fn insert_vacant(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}

/// Dictionary that iterates keys in ascending order.
pub type OrderedDictionary<K, V> = Dictionary<K, V, BTreeMap<K, V>>;

/// A mapping from unique keys to values.
///
/// # Type Parameters
///
/// - `K`: Key type
/// - `V`: Value type
/// - `M`: Backend (default [`FxHashMap`]); see [`OrderedDictionary`]
#[derive(Debug, Clone)]
pub struct Dictionary<K, V, M = FxHashMap<K, V>> {
    map: M,
    _marker: PhantomData<(K, V)>,
}

impl<K, V, M: MapStore<K, V>> Default for Dictionary<K, V, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, M: MapStore<K, V>> Dictionary<K, V, M> {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            map: M::default(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.len() == 0
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// [`CollectionError::DuplicateKey`] if `key` is already present. The
    /// existing value is left untouched.
    pub fn add(&mut self, key: K, value: V) -> Result<()> {
        if self.map.insert_vacant(key, value) {
            Ok(())
        } else {
            log::trace!("rejected duplicate key in strict add");
            Err(CollectionError::DuplicateKey)
        }
    }

    /// Inserts a new entry. Returns `false` if `key` is already present.
    #[inline]
    pub fn try_add(&mut self, key: K, value: V) -> bool {
        self.map.insert_vacant(key, value)
    }

    /// Inserts or overwrites the value for `key`. Never fails.
    ///
    /// Returns the previous value, if any.
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyNotFound`] if `key` is absent.
    #[inline]
    pub fn get(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Returns the value for `key` mutably.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        self.map.get_mut(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::KeyNotFound`] if `key` is absent.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        self.map.remove(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates entries in the backend's order.
    #[inline]
    pub fn iter(&self) -> M::Iter<'_> {
        self.map.iter()
    }

    /// Iterates keys in the backend's order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.map.iter().map(|(k, _)| k)
    }

    /// Iterates values in the backend's order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.map.iter().map(|(_, v)| v)
    }
}

impl<K, V, M: MapStore<K, V>> Extend<(K, V)> for Dictionary<K, V, M> {
    /// Later entries overwrite earlier ones, like [`Dictionary::set`].
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.map.insert(key, value);
        }
    }
}

impl<K, V, M: MapStore<K, V>> FromIterator<(K, V)> for Dictionary<K, V, M> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_duplicate_key() {
        let mut dict: Dictionary<u32, &str> = Dictionary::new();
        dict.add(134134, "John Smith").unwrap();
        dict.add(99999, "Jake Harrison").unwrap();

        assert_eq!(dict.add(99999, "Jane Doe"), Err(CollectionError::DuplicateKey));
        assert_eq!(dict.get(&99999), Ok(&"Jake Harrison"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn try_add_returns_false_on_duplicate() {
        let mut dict: Dictionary<u32, &str> = Dictionary::new();
        assert!(dict.try_add(99999, "Jake"));
        assert!(!dict.try_add(99999, "Jane"));
        assert_eq!(dict.get(&99999), Ok(&"Jake"));
    }

    #[test]
    fn set_overwrites_or_inserts() {
        let mut dict: Dictionary<u32, &str> = Dictionary::new();
        assert_eq!(dict.set(99999, "Jake"), None);
        assert_eq!(dict.set(99999, "Jane"), Some("Jake"));
        assert_eq!(dict.get(&99999), Ok(&"Jane"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn missing_key_errors() {
        let mut dict: Dictionary<u32, u32> = Dictionary::new();
        assert_eq!(dict.get(&1), Err(CollectionError::KeyNotFound));
        assert_eq!(dict.get_mut(&1), Err(CollectionError::KeyNotFound));
        assert_eq!(dict.remove(&1), Err(CollectionError::KeyNotFound));
    }

    #[test]
    fn get_mut_and_remove() {
        let mut dict: Dictionary<&str, u32> = Dictionary::new();
        dict.add("a", 1).unwrap();
        *dict.get_mut(&"a").unwrap() += 10;
        assert_eq!(dict.remove(&"a"), Ok(11));
        assert!(!dict.contains_key(&"a"));
        assert!(dict.is_empty());
    }

    #[test]
    fn ordered_iterates_ascending() {
        let mut dict: OrderedDictionary<u32, &str> = OrderedDictionary::new();
        dict.add(134134, "John Smith").unwrap();
        dict.add(99999, "Jake Harrison").unwrap();
        dict.add(500, "Sam Spa").unwrap();

        let keys: Vec<_> = dict.keys().copied().collect();
        assert_eq!(keys, vec![500, 99999, 134134]);

        let values: Vec<_> = dict.values().copied().collect();
        assert_eq!(values, vec!["Sam Spa", "Jake Harrison", "John Smith"]);
    }

    #[test]
    fn ordered_shares_strict_contracts() {
        let mut dict: OrderedDictionary<u32, &str> = OrderedDictionary::new();
        dict.add(1, "a").unwrap();
        assert_eq!(dict.add(1, "b"), Err(CollectionError::DuplicateKey));
        assert!(!dict.try_add(1, "b"));
        dict.set(1, "b");
        assert_eq!(dict.get(&1), Ok(&"b"));
    }

    #[test]
    fn from_iter_last_write_wins() {
        let dict: Dictionary<u32, &str> = [(1, "a"), (2, "b"), (1, "c")].into_iter().collect();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(&1), Ok(&"c"));
    }

    #[test]
    fn hash_iteration_visits_every_entry() {
        let dict: Dictionary<u32, u32> = (0..50).map(|i| (i, i * 2)).collect();
        let mut seen: Vec<_> = dict.iter().map(|(&k, &v)| (k, v)).collect();
        seen.sort_unstable();
        assert_eq!(seen.len(), 50);
        assert!(seen.iter().all(|&(k, v)| v == k * 2));
    }

    #[test]
    fn clear_empties() {
        let mut dict: OrderedDictionary<u32, u32> = (0..5).map(|i| (i, i)).collect();
        dict.clear();
        assert!(dict.is_empty());
        assert_eq!(dict.iter().count(), 0);
    }
}
