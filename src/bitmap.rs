//! Word-level bit operations on leaf-block bitmaps.
//!
//! A leaf bitmap is an array of `LEAF_WORDS` u64 words; word `w`, bit `b`
//! records membership of value `base + w * 64 + b`.

use crate::constants::LEAF_WORDS;

/// Set a bit in the bitmap.
///
/// # Arguments
/// * `bitmap` - Mutable reference to the leaf bitmap
/// * `word` - Word index (0-31)
/// * `mask` - Single-bit mask inside the word
///
/// # Performance
/// O(1) - direct array access and bitwise OR
#[inline]
pub fn set_bit(bitmap: &mut [u64; LEAF_WORDS], word: usize, mask: u64) {
    bitmap[word] |= mask;
}

/// Check if a bit is set in the bitmap.
///
/// # Returns
/// `true` if bit is set, `false` otherwise
///
/// # Performance
/// O(1) - direct array access and bitwise AND
#[inline]
pub fn is_set(bitmap: &[u64; LEAF_WORDS], word: usize, mask: u64) -> bool {
    bitmap[word] & mask != 0
}
