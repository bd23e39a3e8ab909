use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use range_traits::PartialEnum;

use crate::InvalidInterval;

mod bound;
mod slice;

pub use bound::*;
pub use slice::*;

/// Half-open interval `start..end` where at most one side may be unbounded.
///
/// A `None` start means the interval is unbounded below, a `None` end means it
/// is unbounded above. Reversed bounds are swapped on construction, so that
/// `Interval::new(Some(5), Some(2))` is the same interval as `2..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<K> {
	start: Option<K>,
	end: Option<K>,
}

impl<K> Interval<K> {
	pub fn new(start: Option<K>, end: Option<K>) -> Result<Interval<K>, InvalidInterval>
	where
		K: Ord,
	{
		match (start, end) {
			(None, None) => Err(InvalidInterval::Unbounded),
			(Some(start), Some(end)) if start > end => Ok(Interval {
				start: Some(end),
				end: Some(start),
			}),
			(start, end) => Ok(Interval { start, end }),
		}
	}

	pub fn start(&self) -> Option<&K> {
		self.start.as_ref()
	}

	pub fn end(&self) -> Option<&K> {
		self.end.as_ref()
	}

	pub fn contains(&self, key: &K) -> bool
	where
		K: Ord,
	{
		self.start.as_ref().map(|start| start <= key).unwrap_or(true)
			&& self.end.as_ref().map(|end| key < end).unwrap_or(true)
	}

	/// Computes the anchor under which this interval is stored, together with
	/// its end bound.
	///
	/// The anchor is the start of the interval, or its last included key when
	/// it is unbounded below.
	pub fn encode(&self) -> Result<(K, EndBound<K>), InvalidInterval>
	where
		K: Clone + PartialEnum,
	{
		match (&self.start, &self.end) {
			(Some(start), Some(end)) => Ok((start.clone(), EndBound::Finite(end.clone()))),
			(Some(start), None) => Ok((start.clone(), EndBound::UnboundedAbove)),
			(None, Some(end)) => match end.pred() {
				Some(last) => Ok((last, EndBound::UnboundedBelow)),
				None => Err(InvalidInterval::NoLastElement),
			},
			(None, None) => Err(InvalidInterval::Unbounded),
		}
	}
}

/// Values that can be turned into an [`Interval`].
pub trait IntoInterval<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval>;
}

impl<K> IntoInterval<K> for Interval<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Ok(self)
	}
}

impl<K: Ord> IntoInterval<K> for (Option<K>, Option<K>) {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Interval::new(self.0, self.1)
	}
}

impl<K: Ord> IntoInterval<K> for Range<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Interval::new(Some(self.start), Some(self.end))
	}
}

impl<K: Ord> IntoInterval<K> for RangeFrom<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Interval::new(Some(self.start), None)
	}
}

impl<K: Ord> IntoInterval<K> for RangeTo<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Interval::new(None, Some(self.end))
	}
}

/// An inclusive end without successor (`K::MAX`) is the same as no end.
impl<K: Ord + PartialEnum> IntoInterval<K> for RangeInclusive<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		let (a, b) = self.into_inner();
		let (start, last) = if a > b { (b, a) } else { (a, b) };
		Interval::new(Some(start), last.succ())
	}
}

impl<K: Ord + PartialEnum> IntoInterval<K> for RangeToInclusive<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Interval::new(None, self.end.succ())
	}
}

impl<K> IntoInterval<K> for RangeFull {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		Err(InvalidInterval::Unbounded)
	}
}
