//! Basic usage example for sparse-bitset.
//!
//! This example demonstrates construction, set/get and allocation stats.

use sparse_bitset::{Error, SparseBitSet};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    // RUST_LOG=sparse_bitset=trace shows block allocations
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sparse BitSet - Basic Usage Example ===\n");

    // Create a set over the full 32-bit universe
    let capacity = u32::MAX as u64;
    let mut set = SparseBitSet::new(capacity)?;
    println!("Created set with capacity {}", set.capacity());
    println!("Top-level slots: {}", set.top_len());
    println!("Heap bytes: {}", set.stats().heap_bytes());

    // Set some far-apart values
    println!("\nSetting values: 7, 999, 1_000_000, {capacity}");
    for v in [7, 999, 1_000_000, capacity] {
        set.set(v)?;
    }

    // Check membership
    println!("\nMembership checks:");
    for v in [7, 8, 999, 1_000_000, capacity] {
        println!("  get({v}): {}", set.get(v)?);
    }

    // Out-of-range values are rejected
    println!("\nOut of range:");
    match set.get(capacity + 1) {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  get({}): {err}", capacity + 1),
    }

    // Only touched regions are allocated
    let stats = set.stats();
    println!("\nAllocation:");
    println!("  mid-blocks: {}", stats.mid_blocks);
    println!("  leaf-blocks: {}", stats.leaf_blocks);
    println!("  heap bytes: {}", stats.heap_bytes());

    // Invalid capacity
    println!("\nInvalid capacity:");
    if let Err(err) = SparseBitSet::new(0) {
        println!("  new(0): {err}");
    }

    Ok(())
}
