//! Mid-block: 32 lazily allocated leaf-block slots.

use alloc::boxed::Box;

use crate::block::LeafBlock;
use crate::constants::MID_SLOTS;

/// Mid-block covering 65536 consecutive values through 32 leaf slots.
///
/// Each slot is either absent (`None`, all 2048 values unset) or owns
/// exactly one leaf-block. Slots only ever go from absent to present.
///
/// # Memory Layout
/// - `children`: 256 bytes (32 × nullable box pointer)
#[derive(Debug, Clone)]
pub struct MidBlock {
    children: [Option<Box<LeafBlock>>; MID_SLOTS],
}

impl MidBlock {
    /// Create a new mid-block with every slot absent.
    #[inline]
    pub fn new() -> Self {
        MidBlock {
            children: core::array::from_fn(|_| None),
        }
    }

    /// Get the leaf-block at `slot`, if allocated.
    ///
    /// # Performance
    /// O(1) - direct array indexing
    #[inline(always)]
    pub fn leaf(&self, slot: usize) -> Option<&LeafBlock> {
        self.children[slot].as_deref()
    }

    /// Get the leaf-block at `slot`, allocating a zeroed one if absent.
    ///
    /// # Returns
    /// The leaf-block, and `true` if it was allocated by this call.
    #[inline]
    pub fn leaf_or_alloc(&mut self, slot: usize) -> (&mut LeafBlock, bool) {
        let allocated = self.children[slot].is_none();
        let leaf = self.children[slot].get_or_insert_with(|| Box::new(LeafBlock::new()));
        (&mut **leaf, allocated)
    }
}

impl Default for MidBlock {
    fn default() -> Self {
        Self::new()
    }
}
