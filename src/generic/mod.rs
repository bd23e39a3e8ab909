pub mod tree;

pub use tree::{Iter, RangeTree};
