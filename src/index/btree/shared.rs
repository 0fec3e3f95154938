//! A B-tree handle that can be shared between threads.

use std::sync::Arc;

use parking_lot::RwLock;

use super::BTree;
use crate::common::Result;

/// A cloneable, lock-protected handle to a [`BTree`].
///
/// The tree itself does no locking. This wrapper serializes writers and lets
/// lookups run in parallel:
/// - `insert` / `remove`: write lock
/// - `exists` / `height`: read lock
///
/// Clones share the same tree.
#[derive(Debug)]
pub struct SharedBTree<K> {
    inner: Arc<RwLock<BTree<K>>>,
}

impl<K> SharedBTree<K> {
    /// Create a handle to a new, empty tree.
    pub fn new() -> Self {
        Self::from(BTree::new())
    }

    /// Number of levels in the tree.
    pub fn height(&self) -> usize {
        self.inner.read().height()
    }

    /// Run `f` with shared access to the tree.
    pub fn with_tree<R>(&self, f: impl FnOnce(&BTree<K>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<K: Ord + Clone> SharedBTree<K> {
    /// Insert a key under the write lock.
    ///
    /// # Errors
    /// - `Error::AllocationFailed` if the tree cannot grow
    pub fn insert(&self, key: K) -> Result<()> {
        self.inner.write().insert(key)
    }

    /// Check whether a key is stored, under the read lock.
    pub fn exists(&self, key: &K) -> bool {
        self.inner.read().exists(key)
    }

    /// Remove one matching key under the write lock.
    pub fn remove(&self, key: &K) -> bool {
        self.inner.write().remove(key)
    }
}

impl<K> Clone for SharedBTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for SharedBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<BTree<K>> for SharedBTree<K> {
    fn from(tree: BTree<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}
