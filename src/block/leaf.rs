//! Leaf-block: the bottom level of the tree, holding membership words.

use crate::bitmap;
use crate::constants::LEAF_WORDS;

/// Leaf-block storing 2048 consecutive values as bits.
///
/// # Memory Layout
/// - `bitmap`: 256 bytes (32 × u64)
///
/// Word `w`, bit `b` records membership of value `base + w * 64 + b`,
/// where `base` is the first value of the 2048-value region owned by the
/// parent mid-block slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C)]
pub struct LeafBlock {
    /// Membership words, all zero on allocation.
    pub bitmap: [u64; LEAF_WORDS],
}

impl LeafBlock {
    /// Create a new empty leaf-block.
    ///
    /// # Performance
    /// O(1) - zero-initialized array
    #[inline(always)]
    pub fn new() -> Self {
        LeafBlock {
            bitmap: [0; LEAF_WORDS],
        }
    }

    /// Set the bit selected by `mask` in word `word`.
    #[inline(always)]
    pub fn set(&mut self, word: usize, mask: u64) {
        bitmap::set_bit(&mut self.bitmap, word, mask);
    }

    /// Check the bit selected by `mask` in word `word`.
    #[inline(always)]
    pub fn get(&self, word: usize, mask: u64) -> bool {
        bitmap::is_set(&self.bitmap, word, mask)
    }
}

impl Default for LeafBlock {
    fn default() -> Self {
        Self::new()
    }
}
