//! Value decomposition into a path through the block tree.

use crate::constants::{
    LEAF_MASK, LEAF_SHIFT, MID_MASK, MID_SHIFT, TOP_SHIFT, WORD_MASK,
};

/// Path of a value through the tree: top slot, mid slot, leaf word, bit.
///
/// Decomposition is total and pure. Every `u64` has an address; whether
/// the top index lands inside a given set's top-level array is a matter of
/// the set's capacity check, not of this type.
///
/// # Layout
/// ```text
/// value:  [ ... top ... | mid (5) | leaf (5) | bit (6) ]
///                       16        11         6         0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    /// Index into the top-level array (`value >> 16`).
    pub top: usize,
    /// Leaf-block slot inside the mid-block (bits 11..16).
    pub mid: usize,
    /// Word inside the leaf-block (bits 6..11).
    pub leaf: usize,
    /// Bit inside the word (bits 0..6).
    pub bit: u32,
}

impl Address {
    /// Split a value into its four index components.
    ///
    /// # Performance
    /// O(1) - three shifts and masks
    #[inline(always)]
    pub const fn of(value: u64) -> Self {
        Address {
            top: (value >> TOP_SHIFT) as usize,
            mid: ((value >> MID_SHIFT) & MID_MASK) as usize,
            leaf: ((value >> LEAF_SHIFT) & LEAF_MASK) as usize,
            bit: (value & WORD_MASK) as u32,
        }
    }

    /// Recompose the value this address points at.
    #[inline]
    pub const fn value(self) -> u64 {
        ((self.top as u64) << TOP_SHIFT)
            | ((self.mid as u64) << MID_SHIFT)
            | ((self.leaf as u64) << LEAF_SHIFT)
            | self.bit as u64
    }

    /// Single-bit mask selecting this value inside its word.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        1u64 << self.bit
    }
}

/// Number of top-level slots needed to address every value in `[0, capacity]`.
///
/// `2^max(0, bit_len(capacity) - 16)`: one slot when the capacity fits in
/// 16 bits, 65536 slots at the soft cap.
#[inline]
pub const fn top_len_for(capacity: u64) -> usize {
    let bit_len = u64::BITS - capacity.leading_zeros();
    1usize << bit_len.saturating_sub(TOP_SHIFT)
}
