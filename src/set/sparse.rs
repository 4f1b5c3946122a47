//! Fixed-capacity sparse bitset over `[0, capacity]`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::address::{top_len_for, Address};
use crate::block::MidBlock;
use crate::constants::SOFT_CAP;
use crate::error::{Error, Result};
use crate::set::Stats;

/// Membership set over the inclusive universe `[0, capacity]`.
///
/// Storage is a three-level tree: an eagerly allocated top-level array of
/// mid-block slots, mid-blocks of 32 leaf-block slots, and leaf-blocks of
/// 32 u64 words. Mid- and leaf-blocks are allocated on the first `set`
/// into their range; an absent block reads as all zeros.
///
/// # Architecture
/// - Top-level: `2^max(0, bit_len(capacity) - 16)` slots, 65536 values each
/// - Mid-block: 32 slots, 2048 values each
/// - Leaf-block: 32 words, 64 values each
///
/// # Performance
/// - `set`: O(1), at most two block allocations
/// - `get`: O(1), never allocates
/// - Memory: top-level array + 256 bytes per touched 2048-value region
///   + one mid-block per touched 65536-value region
///
/// # Concurrency
/// `set` takes `&mut self`, so the borrow checker enforces a single writer.
/// To share one set between threads, wrap it in a `Mutex` or `RwLock`.
///
/// # Example
/// ```rust
/// use sparse_bitset::SparseBitSet;
///
/// let mut set = SparseBitSet::new(1000)?;
/// set.set(7)?;
/// assert!(set.get(7)?);
/// assert!(!set.get(8)?);
/// assert!(set.get(1001).is_err());
/// # Ok::<(), sparse_bitset::Error>(())
/// ```
pub struct SparseBitSet {
    /// Inclusive upper bound of the universe
    capacity: u64,

    /// Top-level index, one slot per 65536 values
    top: Box<[Option<Box<MidBlock>>]>,

    /// Number of allocated mid-blocks
    mid_blocks: usize,

    /// Number of allocated leaf-blocks
    leaf_blocks: usize,
}

impl SparseBitSet {
    /// Create an empty set over `[0, capacity]`.
    ///
    /// Allocates only the top-level array; every slot starts absent.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`] if `capacity` is 0 or above [`SOFT_CAP`].
    ///
    /// # Example
    /// ```rust
    /// use sparse_bitset::{Error, SparseBitSet};
    ///
    /// assert!(SparseBitSet::new(1).is_ok());
    /// assert_eq!(
    ///     SparseBitSet::new(0).unwrap_err(),
    ///     Error::InvalidCapacity { capacity: 0 }
    /// );
    /// ```
    pub fn new(capacity: u64) -> Result<Self> {
        if capacity == 0 || capacity > SOFT_CAP {
            return Err(Error::InvalidCapacity { capacity });
        }

        let top_len = top_len_for(capacity);
        let mut top = Vec::with_capacity(top_len);
        top.resize_with(top_len, || None);

        tracing::debug!(capacity, top_len, "created sparse bitset");

        Ok(Self {
            capacity,
            top: top.into_boxed_slice(),
            mid_blocks: 0,
            leaf_blocks: 0,
        })
    }

    /// Mark `value` as a member.
    ///
    /// Allocates the mid-block and leaf-block on the path if absent.
    /// Setting a value twice has the same effect as setting it once.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `value > capacity`; nothing is modified.
    ///
    /// # Example
    /// ```rust
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut set = SparseBitSet::new(65535)?;
    /// set.set(65535)?;
    /// assert!(set.get(65535)?);
    /// # Ok::<(), sparse_bitset::Error>(())
    /// ```
    pub fn set(&mut self, value: u64) -> Result<()> {
        let addr = self.address(value)?;

        let slot = &mut self.top[addr.top];
        if slot.is_none() {
            tracing::trace!(top = addr.top, "allocated mid-block");
            self.mid_blocks += 1;
        }
        let mid = slot.get_or_insert_with(|| Box::new(MidBlock::new()));

        let (leaf, leaf_allocated) = mid.leaf_or_alloc(addr.mid);
        if leaf_allocated {
            tracing::trace!(top = addr.top, mid = addr.mid, "allocated leaf-block");
            self.leaf_blocks += 1;
        }

        leaf.set(addr.leaf, addr.mask());
        Ok(())
    }

    /// Check whether `value` is a member.
    ///
    /// Absent blocks along the path read as unset; nothing is allocated.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `value > capacity`.
    pub fn get(&self, value: u64) -> Result<bool> {
        let addr = self.address(value)?;

        let Some(mid) = self.top[addr.top].as_deref() else {
            return Ok(false);
        };
        let Some(leaf) = mid.leaf(addr.mid) else {
            return Ok(false);
        };
        Ok(leaf.get(addr.leaf, addr.mask()))
    }

    /// Inclusive upper bound of the universe.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of slots in the top-level array.
    #[inline]
    pub fn top_len(&self) -> usize {
        self.top.len()
    }

    /// Allocation counters for the tree.
    pub fn stats(&self) -> Stats {
        Stats {
            top_slots: self.top.len(),
            mid_blocks: self.mid_blocks,
            leaf_blocks: self.leaf_blocks,
        }
    }

    /// Bounds-check `value` and decompose it.
    #[inline(always)]
    fn address(&self, value: u64) -> Result<Address> {
        if value > self.capacity {
            return Err(Error::OutOfRange {
                value,
                capacity: self.capacity,
            });
        }
        Ok(Address::of(value))
    }
}

impl fmt::Debug for SparseBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseBitSet")
            .field("capacity", &self.capacity)
            .field("stats", &self.stats())
            .finish()
    }
}
