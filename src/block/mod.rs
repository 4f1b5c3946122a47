//! Lazily allocated tree nodes: mid-blocks owning leaf-blocks.

mod leaf;
mod mid;

pub use leaf::LeafBlock;
pub use mid::MidBlock;
