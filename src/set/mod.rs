//! Public sparse bitset and its allocation statistics.

#[allow(clippy::module_inception)]
mod sparse;
mod stats;

pub use sparse::SparseBitSet;
pub use stats::Stats;
