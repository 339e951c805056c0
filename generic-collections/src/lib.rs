//! Generic containers with explicit error contracts.
//!
//! Each container covers one access pattern and reports misuse through
//! [`CollectionError`] rather than panicking:
//!
//! | Container | Use it when | Key operations |
//! |-----------|-------------|----------------|
//! | [`FixedArray`] | Size is known up front and order matters | O(1) checked get/set |
//! | [`UniqueSet`] | Values are unique and order doesn't matter | O(1) add/contains |
//! | [`DynamicList`] | Order matters, size changes, duplicates allowed | amortized O(1) append, O(n) search |
//! | [`LinkedSequence`] | Removing from the middle is common | O(1) remove/insert by [`NodeRef`] |
//! | [`Dictionary`] | Values are looked up by a unique key | O(1) add/get/set |
//! | [`OrderedDictionary`] | As above, iterated in key order | O(log n) add/get/set |
//! | [`Stack`] | Last in, first out (undo history) | O(1) push/pop/peek |
//! | [`Queue`] | First in, first out (a checkout line) | O(1) enqueue/dequeue/peek |
//!
//! # Strict and Lenient Variants
//!
//! Operations that can fail on valid input come in two forms:
//!
//! ```
//! use generic_collections::{CollectionError, Dictionary, Stack};
//!
//! let mut ids: Dictionary<u32, &str> = Dictionary::new();
//! ids.add(1, "John").unwrap();
//! assert_eq!(ids.add(1, "Jane"), Err(CollectionError::DuplicateKey)); // strict
//! assert!(!ids.try_add(1, "Jane"));                                   // lenient
//!
//! let mut stack: Stack<u32> = Stack::new();
//! assert_eq!(stack.pop(), Err(CollectionError::EmptyCollection));
//! assert_eq!(stack.try_pop(), None);
//! ```
//!
//! # Node Handles
//!
//! [`LinkedSequence`] stores nodes in an arena and hands out [`NodeRef`]
//! handles instead of pointers. A handle is checked against the sequence
//! that issued it, so a stale or foreign handle is an error, not a dangling
//! reference.
//!
//! # Configuration
//!
//! [`CollectionsConfig`] bounds fixed-array allocation and sets the initial
//! capacity of dynamic lists. It can be read from `COLLECTIONS_*` environment
//! variables.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade at `debug` and `trace` levels.
//! Install a logger to see the output; the `collections-tour` binary uses
//! `tracing-subscriber`.

#![warn(missing_docs)]

pub mod array;
pub mod config;
pub mod dict;
pub mod error;
pub mod key;
pub mod linked;
pub mod list;
pub mod queue;
pub mod set;
pub mod stack;

pub use array::FixedArray;
pub use config::CollectionsConfig;
pub use dict::{Dictionary, MapStore, OrderedDictionary};
pub use error::{CollectionError, Result};
pub use key::Key;
pub use linked::{LinkedSequence, NodeRef};
pub use list::DynamicList;
pub use queue::Queue;
pub use set::UniqueSet;
pub use stack::Stack;
