use std::{fmt, marker::PhantomData};

use btree_slab::generic::Node;
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use range_traits::PartialEnum;
use serde::{
	de::Error,
	ser::{self, SerializeSeq},
	Deserialize, Serialize,
};

use crate::{generic, Entry, Interval};

/// Serializes a tree as a sequence of `(start, end, value)` triples, where a
/// missing bound is `None`.
impl<K, V, C> Serialize for generic::RangeTree<K, V, C>
where
	K: Clone + Ord + PartialEnum + Serialize,
	V: Serialize,
	C: SimpleCollectionRef + Slab<Node<K, Entry<K, V>>>,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		use std::ops::Bound;

		let mut seq = serializer.serialize_seq(Some(self.len()))?;

		for ((start, end), value) in self {
			let start = match start {
				Bound::Included(start) => Some(start.clone()),
				_ => None,
			};

			let end = match end {
				Bound::Excluded(end) => Some(end.clone()),
				Bound::Included(last) => Some(
					last.succ()
						.ok_or_else(|| <S::Error as ser::Error>::custom("interval end overflow"))?,
				),
				Bound::Unbounded => None,
			};

			seq.serialize_element(&(start, end, value))?;
		}

		seq.end()
	}
}

impl<'de, K, V, C> Deserialize<'de> for generic::RangeTree<K, V, C>
where
	K: Clone + Ord + PartialEnum + fmt::Debug + Deserialize<'de>,
	V: Deserialize<'de>,
	C: Default + SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, Entry<K, V>>>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<K, V, C>(PhantomData<(K, V, C)>);

		impl<'de, K, V, C> serde::de::Visitor<'de> for Visitor<K, V, C>
		where
			K: Clone + Ord + PartialEnum + fmt::Debug + Deserialize<'de>,
			V: Deserialize<'de>,
			C: Default + SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, Entry<K, V>>>,
		{
			type Value = generic::RangeTree<K, V, C>;

			fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
				write!(formatter, "a range tree")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut result = generic::RangeTree::new();

				while let Some((start, end, value)) = seq.next_element::<(Option<K>, Option<K>, V)>()? {
					let interval = Interval::new(start, end).map_err(A::Error::custom)?;
					result.insert(interval, value).map_err(A::Error::custom)?;
				}

				Ok(result)
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}
