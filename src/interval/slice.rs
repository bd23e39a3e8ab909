use crate::{IntoInterval, Interval, InvalidInterval};

/// Interval with optional bounds and an optional step.
///
/// Only the default step (`None` or `Some(1)`) can be stored in a range tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice<K> {
	pub start: Option<K>,
	pub end: Option<K>,
	pub step: Option<isize>,
}

impl<K> Slice<K> {
	pub const fn new(start: Option<K>, end: Option<K>) -> Slice<K> {
		Slice {
			start,
			end,
			step: None,
		}
	}

	pub fn step_by(self, step: isize) -> Slice<K> {
		Slice {
			step: Some(step),
			..self
		}
	}
}

impl<K: Ord> IntoInterval<K> for Slice<K> {
	fn into_interval(self) -> Result<Interval<K>, InvalidInterval> {
		match self.step {
			None | Some(1) => Interval::new(self.start, self.end),
			Some(step) => Err(InvalidInterval::Step(step)),
		}
	}
}
