//! A *range tree* maps disjoint intervals of integer keys to values, and
//! finds the value of the interval covering a given key in logarithmic time.
//! It is meant for classifying numeric keys: tier boundaries, bucket
//! assignment, sharding by key range, etc.
//!
//! This library provides a range tree implementation based on
//! [`btree-slab`](https://crates.io/crates/btree-slab)'s B-tree, where each
//! interval is stored under a single key.
//!
//! ## Usage
//!
//! Intervals are half-open (`start..end`) and may be unbounded on one side.
//! Inserting an interval that overlaps an existing one fails and leaves the
//! tree unchanged.
//!
//! ```
//! use range_tree::RangeTree;
//!
//! let mut tree: RangeTree<i64, &str> = RangeTree::new();
//! tree.insert(0..10, "a").unwrap();
//! tree.insert(10..20, "b").unwrap();
//! assert_eq!(tree.get(&9), Ok(&"a"));
//! assert_eq!(tree.get(&10), Ok(&"b"));
//! assert!(tree.get(&20).is_err());
//!
//! assert!(tree.insert(15..25, "c").unwrap_err().is_overlap());
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! Open intervals are supported on either side, but not both:
//!
//! ```
//! # use range_tree::{RangeTree, InvalidInterval, InsertError};
//! let mut tree: RangeTree<i64, char> = RangeTree::new();
//! tree.insert(..5, 'x').unwrap();
//! tree.insert(5.., 'y').unwrap();
//! assert_eq!(tree.get(&-1000), Ok(&'x'));
//! assert_eq!(tree.get(&4), Ok(&'x'));
//! assert_eq!(tree.get(&5), Ok(&'y'));
//!
//! let mut other: RangeTree<i64, char> = RangeTree::new();
//! assert_eq!(other.insert(.., 'z'), Err(InsertError::Invalid(InvalidInterval::Unbounded)));
//! ```
//!
//! Reversed ranges are normalized, and slices with a step other than `1` are
//! rejected:
//!
//! ```
//! # use range_tree::{RangeTree, Slice};
//! let mut tree: RangeTree<i64, u8> = RangeTree::new();
//! tree.insert(20..10, 0).unwrap();
//! assert!(tree.contains(&10));
//! assert!(!tree.contains(&20));
//! assert_eq!(tree.get_or(&20, &1), &1);
//!
//! assert!(tree.insert(Slice::new(Some(30), Some(40)).step_by(2), 0).is_err());
//! ```
//!
//! ## Concurrency
//!
//! Insertion requires a mutable reference to the tree: validation and
//! insertion are not atomic on their own. Shared references can be used to
//! query the tree from several threads at once.
pub mod generic;
mod error;
mod interval;

#[cfg(feature = "serde")]
mod serde;

pub use error::*;
pub use interval::*;

pub type DefaultContainer<K, V> = slab::Slab<btree_slab::generic::Node<K, Entry<K, V>>>;

pub type RangeTree<K, V> = generic::RangeTree<K, V, DefaultContainer<K, V>>;
