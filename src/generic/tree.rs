use std::{fmt, ops::Bound};

use btree_slab::generic::{
	map::{BTreeExt, BTreeMap},
	Node,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use range_traits::PartialEnum;
use tracing::{debug, trace};

use crate::{EndBound, Entry, InsertError, IntoInterval, Interval, NotFound};

/// Map from disjoint intervals to values.
///
/// Each interval is stored in the B-tree under a single key, its *anchor*:
/// the start of the interval, or its last included key when the interval is
/// unbounded below. Since stored intervals never overlap, looking at the
/// neighbors of an anchor is enough to validate an insertion or resolve a
/// key.
#[derive(Clone)]
pub struct RangeTree<K, V, C> {
	btree: BTreeMap<K, Entry<K, V>, C>,
}

impl<K, V, C> RangeTree<K, V, C> {
	/// Create a new empty tree.
	pub fn new() -> RangeTree<K, V, C>
	where
		C: Default,
	{
		RangeTree {
			btree: BTreeMap::new(),
		}
	}

	/// Number of stored intervals.
	pub fn len(&self) -> usize {
		self.btree.len()
	}

	pub fn is_empty(&self) -> bool {
		self.btree.is_empty()
	}
}

impl<K, V, C: Default> Default for RangeTree<K, V, C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Ord, V, C: SimpleCollectionRef + Slab<Node<K, Entry<K, V>>>> RangeTree<K, V, C> {
	/// Entry with the greatest anchor less or equal to `key`.
	fn floor(&self, key: &K) -> Option<(&K, &Entry<K, V>)> {
		let addr = match self.btree.address_of(key) {
			Ok(addr) => addr,
			Err(addr) => self.btree.previous_item_address(addr)?,
		};

		self.btree.item(addr).map(|item| (item.key(), item.value()))
	}

	/// Entry with the least anchor greater or equal to `key`.
	fn ceiling(&self, key: &K) -> Option<(&K, &Entry<K, V>)> {
		let addr = match self.btree.address_of(key) {
			Ok(addr) | Err(addr) => addr,
		};

		let addr = self.btree.normalize(addr)?;
		self.btree.item(addr).map(|item| (item.key(), item.value()))
	}

	fn resolve(&self, key: &K) -> Option<&V> {
		match self.floor(key) {
			Some((anchor, entry)) => {
				if entry.covers_from(anchor, key) {
					Some(&entry.value)
				} else {
					None
				}
			}
			None => match self.ceiling(key) {
				Some((_, entry)) if entry.covers_below() => Some(&entry.value),
				_ => None,
			},
		}
	}

	/// Returns the value of the interval covering `key`.
	pub fn get(&self, key: &K) -> Result<&V, NotFound<K>>
	where
		K: Clone,
	{
		self.resolve(key).ok_or_else(|| NotFound(key.clone()))
	}

	/// Returns the value of the interval covering `key`, or `default` if
	/// there is none.
	pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
		self.resolve(key).unwrap_or(default)
	}

	pub fn contains(&self, key: &K) -> bool {
		self.resolve(key).is_some()
	}

	/// Finds a stored interval intersecting `interval`, stored under `anchor`,
	/// and returns its anchor.
	///
	/// Only the floor and ceiling entries of `anchor` are checked, which is
	/// enough as long as the stored intervals do not overlap each other.
	fn overlapping_neighbor(&self, anchor: &K, interval: &Interval<K>) -> Option<&K> {
		if let Some((lower_anchor, lower)) = self.floor(anchor) {
			let overlaps = match (interval.start(), &lower.bound) {
				(None, _) => true,
				(Some(_), EndBound::UnboundedAbove) => true,
				(Some(start), EndBound::Finite(end)) => end > start,
				// Covers nothing past its own anchor.
				(Some(_), EndBound::UnboundedBelow) => false,
			};

			if overlaps {
				return Some(lower_anchor);
			}
		}

		if let Some((upper_anchor, upper)) = self.ceiling(anchor) {
			let overlaps = match interval.end() {
				None => true,
				Some(end) => upper.covers_below() || upper_anchor < end,
			};

			if overlaps {
				return Some(upper_anchor);
			}
		}

		None
	}

	pub fn iter(&self) -> Iter<'_, K, V, C> {
		Iter {
			inner: self.btree.iter(),
		}
	}
}

impl<K, V, C> RangeTree<K, V, C>
where
	K: Clone + Ord + PartialEnum + fmt::Debug,
	C: SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, Entry<K, V>>>,
{
	/// Binds `value` to every key of `interval`.
	///
	/// Fails without modifying the tree if the interval is invalid or
	/// intersects an already stored interval.
	pub fn insert<I: IntoInterval<K>>(&mut self, interval: I, value: V) -> Result<(), InsertError<K>> {
		let interval = interval.into_interval()?;
		let (anchor, bound) = interval.encode()?;

		if let Some(neighbor) = self.overlapping_neighbor(&anchor, &interval).cloned() {
			debug!(?anchor, ?neighbor, "rejected overlapping interval");
			return Err(InsertError::Overlap { anchor, neighbor });
		}

		trace!(?anchor, ?bound, "insert interval");
		self.btree.insert(anchor, Entry::new(value, bound));
		Ok(())
	}

	/// Builds a tree from `(interval, value)` pairs, inserted in order.
	pub fn try_from_iter<I, R>(iter: I) -> Result<RangeTree<K, V, C>, InsertError<K>>
	where
		I: IntoIterator<Item = (R, V)>,
		R: IntoInterval<K>,
		C: Default,
	{
		let mut result = RangeTree::new();

		for (interval, value) in iter {
			result.insert(interval, value)?;
		}

		Ok(result)
	}
}

impl<K, V, C> fmt::Debug for RangeTree<K, V, C>
where
	K: Ord + fmt::Debug,
	V: fmt::Debug,
	C: SimpleCollectionRef + Slab<Node<K, Entry<K, V>>>,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

/// Iterator over the intervals of a [`RangeTree`], in key order.
///
/// Each interval is given as a pair of bounds, which implements
/// [`RangeBounds`](std::ops::RangeBounds).
pub struct Iter<'a, K, V, C> {
	inner: btree_slab::generic::map::Iter<'a, K, Entry<K, V>, C>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
	C: SimpleCollectionRef + Slab<Node<K, Entry<K, V>>>,
{
	type Item = ((Bound<&'a K>, Bound<&'a K>), &'a V);

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(anchor, entry)| (entry.bounds(anchor), &entry.value))
	}
}

impl<'a, K: Ord, V, C> IntoIterator for &'a RangeTree<K, V, C>
where
	C: SimpleCollectionRef + Slab<Node<K, Entry<K, V>>>,
{
	type Item = ((Bound<&'a K>, Bound<&'a K>), &'a V);
	type IntoIter = Iter<'a, K, V, C>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use crate::{InsertError, RangeTree};

	#[test]
	fn floor_and_ceiling() {
		let mut tree: RangeTree<i32, ()> = RangeTree::new();
		tree.insert(0..2, ()).unwrap();
		tree.insert(4..6, ()).unwrap();
		tree.insert(8.., ()).unwrap();

		assert_eq!(tree.floor(&-1).map(|(a, _)| *a), None);
		assert_eq!(tree.floor(&0).map(|(a, _)| *a), Some(0));
		assert_eq!(tree.floor(&3).map(|(a, _)| *a), Some(0));
		assert_eq!(tree.floor(&4).map(|(a, _)| *a), Some(4));
		assert_eq!(tree.floor(&100).map(|(a, _)| *a), Some(8));

		assert_eq!(tree.ceiling(&-1).map(|(a, _)| *a), Some(0));
		assert_eq!(tree.ceiling(&1).map(|(a, _)| *a), Some(4));
		assert_eq!(tree.ceiling(&8).map(|(a, _)| *a), Some(8));
		assert_eq!(tree.ceiling(&9).map(|(a, _)| *a), None);
	}

	#[test]
	fn floor_and_ceiling_across_nodes() {
		let mut tree: RangeTree<i32, usize> = RangeTree::new();

		// 37 is coprime with 100, so this visits every slot once, out of order.
		for i in (0..100).map(|i| (i * 37) % 100) {
			tree.insert(i * 10..i * 10 + 5, i as usize).unwrap();
		}
		assert_eq!(tree.len(), 100);

		for i in 0..100 {
			let anchor = i * 10;
			assert_eq!(tree.floor(&anchor).map(|(a, _)| *a), Some(anchor));
			assert_eq!(tree.ceiling(&anchor).map(|(a, _)| *a), Some(anchor));

			let between = anchor + 7;
			assert_eq!(tree.floor(&between).map(|(a, _)| *a), Some(anchor));
			let next = if i < 99 { Some(anchor + 10) } else { None };
			assert_eq!(tree.ceiling(&between).map(|(a, _)| *a), next);

			assert_eq!(tree.get(&(anchor + 4)), Ok(&(i as usize)));
			assert!(tree.get(&(anchor + 5)).is_err());
		}

		assert_eq!(tree.floor(&-1).map(|(a, _)| *a), None);
		assert_eq!(tree.ceiling(&-1).map(|(a, _)| *a), Some(0));
		assert_eq!(tree.floor(&10_000).map(|(a, _)| *a), Some(990));
		assert_eq!(tree.ceiling(&10_000).map(|(a, _)| *a), None);
	}

	#[test]
	fn floor_and_ceiling_empty() {
		let tree: RangeTree<i32, ()> = RangeTree::new();
		assert!(tree.floor(&0).is_none());
		assert!(tree.ceiling(&0).is_none());
		assert!(!tree.contains(&0));
	}

	#[test]
	fn overlap_reports_neighbor() {
		let mut tree: RangeTree<i32, char> = RangeTree::new();
		tree.insert(0..10, 'a').unwrap();
		tree.insert(20..30, 'b').unwrap();

		assert_eq!(
			tree.insert(5..15, 'c'),
			Err(InsertError::Overlap {
				anchor: 5,
				neighbor: 0
			})
		);
		assert_eq!(
			tree.insert(15..25, 'c'),
			Err(InsertError::Overlap {
				anchor: 15,
				neighbor: 20
			})
		);
		assert_eq!(
			tree.insert(..21, 'c'),
			Err(InsertError::Overlap {
				anchor: 20,
				neighbor: 20
			})
		);
	}

	// An unbounded-below floor neighbor is never checked against the start
	// of the candidate: it is the ceiling check that catches a candidate
	// starting on the neighbor's anchor.
	#[test]
	fn unbounded_below_floor_neighbor() {
		let mut tree: RangeTree<i32, char> = RangeTree::new();
		tree.insert(..5, 'x').unwrap();

		assert_eq!(
			tree.insert(4..8, 'y'),
			Err(InsertError::Overlap {
				anchor: 4,
				neighbor: 4
			})
		);
		tree.insert(5..8, 'y').unwrap();
		assert_eq!(tree.get(&4), Ok(&'x'));
		assert_eq!(tree.get(&5), Ok(&'y'));
	}

	#[test]
	fn debug() {
		let mut tree: RangeTree<i32, char> = RangeTree::new();
		tree.insert(..0, 'a').unwrap();
		tree.insert(0..3, 'b').unwrap();
		tree.insert(3.., 'c').unwrap();

		assert_eq!(
			format!("{:?}", tree),
			"{(Unbounded, Included(-1)): 'a', (Included(0), Excluded(3)): 'b', (Included(3), Unbounded): 'c'}"
		);
	}
}
