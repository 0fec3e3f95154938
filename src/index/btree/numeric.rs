//! `f64` instantiation of the B-tree.
//!
//! Host bindings deal in plain double-precision numbers. [`NumericIndex`]
//! is the single concrete instantiation they need: construct, insert,
//! exists, remove.

use super::BTree;
use crate::common::{OrderedF64, Result};

/// A B-tree of `f64` keys.
///
/// Keys are ordered by [`OrderedF64`]. NaN is not a supported key.
///
/// # Example
/// ```
/// use btreelib::NumericIndex;
///
/// let mut index = NumericIndex::new();
/// for key in [1.0, 2.0, 5.5, -3.3, 0.0] {
///     index.insert(key).unwrap();
/// }
///
/// assert!(index.exists(5.5));
/// assert!(index.remove(-3.3));
/// assert!(!index.exists(-3.3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumericIndex {
    tree: BTree<OrderedF64>,
}

impl NumericIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            tree: BTree::new(),
        }
    }

    /// Insert a key. Duplicates are kept.
    ///
    /// # Errors
    /// - `Error::AllocationFailed` if the tree cannot grow
    pub fn insert(&mut self, key: f64) -> Result<()> {
        self.tree.insert(OrderedF64::new(key))
    }

    /// Check whether `key` is stored.
    pub fn exists(&self, key: f64) -> bool {
        self.tree.exists(&OrderedF64::new(key))
    }

    /// Remove one instance of `key`. Returns `false` if it was not present.
    pub fn remove(&mut self, key: f64) -> bool {
        self.tree.remove(&OrderedF64::new(key))
    }

    /// Number of levels in the tree.
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_mixed_values() {
        let keys = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 5.5, -3.3, 0.0];
        let mut index = NumericIndex::new();
        for key in keys {
            index.insert(key).unwrap();
        }

        for key in keys {
            assert!(index.exists(key));
        }
        assert!(!index.exists(5.25));
    }

    #[test]
    fn test_remove_absent_key() {
        let mut index = NumericIndex::new();
        assert!(!index.remove(42.0));
        assert_eq!(index.height(), 1);
    }

    #[test]
    fn test_fractional_keys_stay_ordered() {
        let mut index = NumericIndex::new();
        for i in 0..100 {
            index.insert(i as f64 / 10.0).unwrap();
        }
        for i in (0..100).step_by(3) {
            assert!(index.remove(i as f64 / 10.0));
        }
        for i in 0..100 {
            assert_eq!(index.exists(i as f64 / 10.0), i % 3 != 0);
        }
    }
}
