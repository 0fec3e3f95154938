//! Index structures.
//!
//! Currently implements:
//! - [`btree`] - In-memory B-tree with pre-emptive split and merge

pub mod btree;

pub use btree::{BTree, NumericIndex, SharedBTree};
