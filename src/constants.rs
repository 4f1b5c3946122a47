//! Layout constants for the three-level block tree.
//!
//! A value is split, from least to most significant bits, into:
//! - 6 bits: bit index inside a 64-bit word
//! - 5 bits: word index inside a leaf-block (32 words)
//! - 5 bits: leaf-block index inside a mid-block (32 slots)
//! - the rest: index into the top-level array

/// Number of bits addressing a bit inside one word (2^6 = 64).
pub const WORD_BITS_LEN: u32 = 6;

/// Number of bits addressing a word inside one leaf-block (2^5 = 32).
pub const LEAF_BITS_LEN: u32 = 5;

/// Number of bits addressing a leaf-block inside one mid-block (2^5 = 32).
pub const MID_BITS_LEN: u32 = 5;

/// Shift to reach the word index.
pub const LEAF_SHIFT: u32 = WORD_BITS_LEN;

/// Shift to reach the leaf-block index.
pub const MID_SHIFT: u32 = WORD_BITS_LEN + LEAF_BITS_LEN;

/// Shift to reach the top-level index.
pub const TOP_SHIFT: u32 = WORD_BITS_LEN + LEAF_BITS_LEN + MID_BITS_LEN;

/// Mask for the bit-in-word component (0x3F).
pub const WORD_MASK: u64 = (1 << WORD_BITS_LEN) - 1;

/// Mask for the word-in-leaf component (0x1F).
pub const LEAF_MASK: u64 = (1 << LEAF_BITS_LEN) - 1;

/// Mask for the leaf-in-mid component (0x1F).
pub const MID_MASK: u64 = (1 << MID_BITS_LEN) - 1;

/// Number of u64 words in a leaf-block.
pub const LEAF_WORDS: usize = 1 << LEAF_BITS_LEN;

/// Number of leaf-block slots in a mid-block.
pub const MID_SLOTS: usize = 1 << MID_BITS_LEN;

/// Values covered by one word.
pub const VALUES_PER_WORD: u64 = 1 << WORD_BITS_LEN;

/// Values covered by one leaf-block (32 × 64 = 2048).
pub const VALUES_PER_LEAF: u64 = VALUES_PER_WORD * LEAF_WORDS as u64;

/// Values covered by one mid-block, i.e. one top-level slot (32 × 2048 = 65536).
pub const VALUES_PER_MID: u64 = VALUES_PER_LEAF * MID_SLOTS as u64;

/// Largest capacity accepted at construction.
///
/// Bounds the eagerly allocated top-level array to 2^16 slots.
pub const SOFT_CAP: u64 = u32::MAX as u64;

const _: () = assert!(u64::BITS == 1 << WORD_BITS_LEN);
const _: () = assert!(VALUES_PER_MID == 1 << TOP_SHIFT);
