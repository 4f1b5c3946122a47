//! # sparse-bitset
//!
//! Fixed-capacity membership set over `[0, capacity]` for sparse data.
//! O(1) set and get. Memory proportional to touched regions, not capacity.
//!
//! ## Features
//! - 3-level lazily allocated tree: 65536 / 2048 / 64 values per level
//! - Shift-and-mask address decomposition, no hashing
//! - Capacity up to `u32::MAX`
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use sparse_bitset::SparseBitSet;
//!
//! let mut set = SparseBitSet::new(u32::MAX as u64)?;
//! set.set(3_000_000_000)?;
//! assert!(set.get(3_000_000_000)?);
//! assert_eq!(set.stats().leaf_blocks, 1);
//! # Ok::<(), sparse_bitset::Error>(())
//! ```

#![no_std]

extern crate alloc;

mod address;
mod bitmap;
mod block;
pub mod constants;
mod error;
mod set;

pub use address::{top_len_for, Address};
pub use error::{Error, Result};
pub use set::{SparseBitSet, Stats};
