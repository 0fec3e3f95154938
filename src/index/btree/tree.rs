//! The B-tree index.
//!
//! [`BTree`] owns exactly one root [`Node`] and handles the two changes that
//! only happen at the top of the tree:
//! - Root growth: a full root is split under a new root before an insert
//! - Root collapse: an internal root left without keys after a delete is
//!   replaced by its only child

use std::fmt;
use std::mem;

use super::node::Node;
use crate::common::Result;

/// An in-memory B-tree over totally ordered keys.
///
/// The branching parameter is fixed by
/// [`BRANCHING_FACTOR`](crate::common::config::BRANCHING_FACTOR).
/// Duplicate keys are allowed; `remove` takes out one matching instance,
/// without a guarantee about which one.
///
/// # Thread Safety
/// `BTree` does no locking of its own. Mutation needs `&mut self`, so sharing
/// a tree between threads requires an external lock, see
/// [`SharedBTree`](super::SharedBTree).
///
/// # Example
/// ```
/// use btreelib::BTree;
///
/// let mut tree = BTree::new();
/// for key in 1..=11 {
///     tree.insert(key).unwrap();
/// }
///
/// assert!(tree.exists(&7));
/// assert_eq!(tree.height(), 2);
///
/// assert!(tree.remove(&7));
/// assert!(!tree.exists(&7));
/// assert!(!tree.remove(&7));
/// ```
#[derive(Debug, Clone)]
pub struct BTree<K> {
    root: Node<K>,
}

impl<K> BTree<K> {
    /// Create an empty tree (a single empty leaf root).
    pub fn new() -> Self {
        Self {
            root: Node::empty_leaf(),
        }
    }

    /// Number of levels from the root down to the leaves.
    ///
    /// An empty tree, like any tree whose root is a leaf, has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while !node.is_leaf {
            node = &node.children[0];
            height += 1;
        }
        height
    }
}

impl<K: Ord + Clone> BTree<K> {
    /// Insert a key.
    ///
    /// All memory the insert needs (new root, split siblings, key and child
    /// slots) is reserved before the tree is touched.
    ///
    /// # Errors
    /// - `Error::AllocationFailed` if that memory cannot be reserved. The
    ///   tree is unchanged in that case.
    pub fn insert(&mut self, key: K) -> Result<()> {
        let mut spares = Vec::new();
        let new_root = if self.root.is_full() {
            let new_root = Node::with_capacity(false)?;
            self.root.reserve_split(&key, &mut spares)?;
            Some(new_root)
        } else {
            self.root.reserve_insert(&key, &mut spares)?;
            None
        };

        let mut spares = spares.into_iter();
        if let Some(new_root) = new_root {
            self.grow_root(new_root, &mut spares);
        }
        self.root.insert_reserved(key, &mut spares);
        debug_assert!(spares.next().is_none(), "unused split sibling");

        Ok(())
    }

    /// Check whether a key equal to `key` is stored.
    pub fn exists(&self, key: &K) -> bool {
        let mut node = &self.root;
        loop {
            if let Some(i) = node.lower_bound_inclusive(key) {
                if node.keys[i] == *key {
                    return true;
                }
            }
            if node.is_leaf {
                return false;
            }
            node = &node.children[node.descent_index(key)];
        }
    }

    /// Remove one key equal to `key`.
    ///
    /// Returns `false` (and leaves the stored keys untouched) if no such key
    /// exists, including on an empty tree.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = self.root.remove(key);

        if self.root.keys.is_empty() && !self.root.is_leaf {
            self.collapse_root();
        }

        removed
    }

    // ========================================================================
    // Internal: root growth and collapse
    // ========================================================================

    /// Put `new_root` above the full root and split the old root into its
    /// two children. Height grows by one.
    fn grow_root(&mut self, mut new_root: Node<K>, spares: &mut impl Iterator<Item = Node<K>>) {
        let old_root = mem::replace(&mut self.root, Node::empty_leaf());
        new_root.children.push(old_root);
        new_root.split_child_reserved(0, spares);
        self.root = new_root;

        debug_log!(height = self.height(), "root split");
    }

    /// Replace the keyless internal root with its only child. Height shrinks
    /// by one.
    fn collapse_root(&mut self) {
        debug_assert_eq!(self.root.children.len(), 1);
        let child = self.root.children.remove(0);
        self.root = child;

        debug_log!(height = self.height(), "root collapsed");
    }
}

impl<K> Default for BTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the tree level by level, one line per level.
///
/// ```text
/// [3]
/// [1, 2] [4, 5, 6]
/// ```
impl<K: fmt::Display> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut level = vec![&self.root];
        while !level.is_empty() {
            for (n, node) in level.iter().enumerate() {
                if n > 0 {
                    write!(f, " ")?;
                }
                write!(f, "[")?;
                for (i, key) in node.keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", key)?;
                }
                write!(f, "]")?;
            }
            level = level.iter().flat_map(|node| node.children.iter()).collect();
            if !level.is_empty() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
