//! Error types for sparse bitset operations.

use thiserror::Error;

use crate::constants::SOFT_CAP;

/// Errors returned by [`SparseBitSet`](crate::SparseBitSet).
///
/// Both kinds are raised before any mutation takes place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Requested capacity is zero or above the soft cap.
    #[error("invalid capacity {capacity}: must be in 1..={}", SOFT_CAP)]
    InvalidCapacity { capacity: u64 },

    /// Value lies outside the universe `[0, capacity]`.
    #[error("value {value} out of range: capacity is {capacity}")]
    OutOfRange { value: u64, capacity: u64 },
}

/// Result alias for sparse bitset operations.
pub type Result<T> = core::result::Result<T, Error>;
