use std::ops::Bound;

/// End of a stored interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndBound<K> {
	/// Excluded upper bound.
	Finite(K),

	/// The interval has no upper bound.
	UnboundedAbove,

	/// The interval has no lower bound, and its anchor is the last key it
	/// includes.
	UnboundedBelow,
}

impl<K> EndBound<K> {
	pub fn is_unbounded_below(&self) -> bool {
		matches!(self, Self::UnboundedBelow)
	}
}

/// Value stored in the B-tree under an interval anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
	pub value: V,
	pub bound: EndBound<K>,
}

impl<K, V> Entry<K, V> {
	pub fn new(value: V, bound: EndBound<K>) -> Entry<K, V> {
		Entry { value, bound }
	}

	/// Checks if this entry, stored under `anchor`, covers `key` where
	/// `anchor <= key`.
	pub fn covers_from(&self, anchor: &K, key: &K) -> bool
	where
		K: Ord,
	{
		match &self.bound {
			EndBound::Finite(end) => key < end,
			EndBound::UnboundedAbove => true,
			EndBound::UnboundedBelow => anchor == key,
		}
	}

	/// Checks if this entry covers every key below its anchor.
	pub fn covers_below(&self) -> bool {
		self.bound.is_unbounded_below()
	}

	/// Decodes the keys covered by this entry stored under `anchor`.
	pub fn bounds<'a>(&'a self, anchor: &'a K) -> (Bound<&'a K>, Bound<&'a K>) {
		match &self.bound {
			EndBound::Finite(end) => (Bound::Included(anchor), Bound::Excluded(end)),
			EndBound::UnboundedAbove => (Bound::Included(anchor), Bound::Unbounded),
			EndBound::UnboundedBelow => (Bound::Unbounded, Bound::Included(anchor)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::ops::RangeBounds;

	#[test]
	fn covers_from() {
		let finite = Entry::new((), EndBound::Finite(10));
		assert!(finite.covers_from(&0, &0));
		assert!(finite.covers_from(&0, &9));
		assert!(!finite.covers_from(&0, &10));

		let above = Entry::new((), EndBound::UnboundedAbove);
		assert!(above.covers_from(&0, &i32::MAX));

		let below = Entry::new((), EndBound::UnboundedBelow);
		assert!(below.covers_from(&4, &4));
		assert!(!below.covers_from(&4, &5));
		assert!(below.covers_below());
	}

	#[test]
	fn bounds() {
		let below = Entry::new((), EndBound::UnboundedBelow);
		let bounds = below.bounds(&4);
		assert!(RangeBounds::<i32>::contains(&bounds, &-100));
		assert!(RangeBounds::<i32>::contains(&bounds, &4));
		assert!(!RangeBounds::<i32>::contains(&bounds, &5));

		let finite = Entry::new((), EndBound::Finite(3));
		assert!(!RangeBounds::<i32>::contains(&finite.bounds(&3), &3));
	}
}
