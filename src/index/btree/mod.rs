//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - The generic tree: insert, exists, remove
//! - [`NumericIndex`] - `f64` instantiation for host bindings
//! - [`SharedBTree`] - Lock-protected handle for use across threads
//!
//! Nodes are internal; see `node.rs` for the split, borrow and merge
//! primitives.

mod node;
mod numeric;
mod shared;
mod tree;

pub use numeric::NumericIndex;
pub use shared::SharedBTree;
pub use tree::BTree;
