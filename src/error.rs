use thiserror::Error;

/// Reasons an interval-like value cannot be stored in a range tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInterval {
	/// Neither the start nor the end is bounded.
	#[error("intervals unbounded on both sides are not supported")]
	Unbounded,

	/// The interval has a step other than `1`.
	#[error("intervals with custom steps ({0}) are not supported")]
	Step(isize),

	/// The interval is unbounded below and its end is the smallest key, so it
	/// has no last included point.
	#[error("interval unbounded below has no last element")]
	NoLastElement,
}

/// Error returned by [`RangeTree::insert`](crate::generic::RangeTree::insert).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError<K> {
	#[error(transparent)]
	Invalid(#[from] InvalidInterval),

	/// The interval intersects the one stored under the `neighbor` anchor.
	#[error("interval anchored at {anchor:?} overlaps the interval anchored at {neighbor:?}")]
	Overlap { anchor: K, neighbor: K },
}

impl<K> InsertError<K> {
	pub fn is_overlap(&self) -> bool {
		matches!(self, Self::Overlap { .. })
	}
}

/// No stored interval covers the given key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no interval covers {0:?}")]
pub struct NotFound<K>(pub K);
