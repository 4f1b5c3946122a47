//! Allocation counters for a sparse bitset.

use alloc::boxed::Box;
use core::mem::size_of;

use crate::block::{LeafBlock, MidBlock};

/// Snapshot of how much of the tree has been materialized.
///
/// Memory grows with the number of distinct 2048-value regions touched by
/// `set`, never with the capacity beyond the top-level array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Slots in the eagerly allocated top-level array.
    pub top_slots: usize,
    /// Allocated mid-blocks (one per touched 65536-value region).
    pub mid_blocks: usize,
    /// Allocated leaf-blocks (one per touched 2048-value region).
    pub leaf_blocks: usize,
}

impl Stats {
    /// Heap bytes owned by the tree: top-level array plus every allocated block.
    pub fn heap_bytes(&self) -> usize {
        self.top_slots * size_of::<Option<Box<MidBlock>>>()
            + self.mid_blocks * size_of::<MidBlock>()
            + self.leaf_blocks * size_of::<LeafBlock>()
    }
}
