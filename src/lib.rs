//! btreelib - An in-memory B-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           btreelib                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Binding boundary (index::btree)                 │   │
//! │  │     NumericIndex (f64)   │   SharedBTree (RwLock)        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  BTree<K: Ord>                           │   │
//! │  │      root growth (split)  │  root collapse (merge)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                       Node<K>                            │   │
//! │  │  split_child │ borrow_from_prev/next │ merge │ remove   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error, OrderedF64)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use btreelib::BTree;
//!
//! let mut tree = BTree::new();
//! for key in [1, 2, 3, 4, 5, 6] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert!(tree.exists(&4));
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! ```

#[macro_use]
mod tracing_helpers;

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::BRANCHING_FACTOR;
pub use common::{Error, OrderedF64, Result};

pub use index::{BTree, NumericIndex, SharedBTree};
