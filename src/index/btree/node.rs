//! B-tree node - the recursive unit of the index.
//!
//! A [`Node`] holds an ordered run of keys and, if internal, one more child
//! than it has keys. All local restructuring lives here:
//! - Split of a full child (insert path)
//! - Predecessor / successor substitution (delete of an internal key)
//! - Borrow from a sibling and sibling merge (delete path refill)
//!
//! The delete path separates *deciding* what to do ([`DeleteCase`],
//! [`Refill`]) from *applying* it, so each primitive can be tested alone.

use std::mem;

use crate::common::config::{BRANCHING_FACTOR, MAX_KEYS, MIN_KEYS};
use crate::common::{Error, Result};

/// A single B-tree node.
///
/// # Layout
/// ```text
///            keys:      [ k0 | k1 | k2 ]
///            children: c0   c1   c2   c3
///
///   keys(c0) <= k0 <= keys(c1) <= k1 <= keys(c2) <= k2 <= keys(c3)
/// ```
///
/// # Ownership
/// Each child slot owns its node outright. Split, merge and borrow move
/// children between slots; a node is never reachable from two parents.
///
/// # Capacity
/// Every node that can become a non-root node is allocated with room for
/// [`MAX_KEYS`] keys (and `MAX_KEYS + 1` children). Merges and borrows never
/// exceed those bounds, so the delete path does not allocate. `Clone` keeps
/// that headroom.
#[derive(Debug)]
pub(crate) struct Node<K> {
    /// Whether this node has no children.
    pub(crate) is_leaf: bool,

    /// Non-decreasing keys, at most [`MAX_KEYS`].
    pub(crate) keys: Vec<K>,

    /// Owned children, `keys.len() + 1` of them when internal, empty for leaves.
    pub(crate) children: Vec<Node<K>>,
}

/// How to remove a key found at an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeleteCase {
    /// Left child can spare a key: substitute the in-order predecessor.
    Predecessor,
    /// Right child can spare a key: substitute the in-order successor.
    Successor,
    /// Both neighbours are minimal: fuse them around the key.
    Merge,
}

/// How to top up a child before descending into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Refill {
    /// Child already has at least `t` keys.
    NotNeeded,
    /// Rotate one key in from the left sibling.
    BorrowFromPrev,
    /// Rotate one key in from the right sibling.
    BorrowFromNext,
    /// Fuse the child with its right sibling; descend into the child.
    MergeWithNext,
    /// Fuse the left sibling with the child; descend into the left sibling.
    MergeWithPrev,
}

impl<K: Clone> Clone for Node<K> {
    fn clone(&self) -> Self {
        let mut keys = Vec::with_capacity(self.keys.capacity().max(MAX_KEYS));
        keys.extend_from_slice(&self.keys);

        let mut children = Vec::new();
        if !self.is_leaf {
            children.reserve_exact(self.children.capacity().max(MAX_KEYS + 1));
            children.extend(self.children.iter().cloned());
        }

        Self {
            is_leaf: self.is_leaf,
            keys,
            children,
        }
    }
}

impl<K> Node<K> {
    /// Create an empty leaf without reserving any key storage.
    ///
    /// Only used for the root of an empty tree.
    pub(crate) fn empty_leaf() -> Self {
        Self {
            is_leaf: true,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty node with room for a full set of keys and children.
    ///
    /// # Errors
    /// - `Error::AllocationFailed` if the storage cannot be reserved
    pub(crate) fn with_capacity(is_leaf: bool) -> Result<Self> {
        #[cfg(test)]
        if !fault::take_allocation() {
            return Err(Error::alloc("node keys")(fault::failed_reservation()));
        }

        let mut keys = Vec::new();
        keys.try_reserve_exact(MAX_KEYS)
            .map_err(Error::alloc("node keys"))?;

        let mut children = Vec::new();
        if !is_leaf {
            children
                .try_reserve_exact(MAX_KEYS + 1)
                .map_err(Error::alloc("node children"))?;
        }

        Ok(Self {
            is_leaf,
            keys,
            children,
        })
    }

    /// Check if the node holds `2t - 1` keys.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.keys.len() == MAX_KEYS
    }

    /// Check if the node can give up a key and stay at or above `t - 1`.
    #[inline]
    fn can_spare_key(&self) -> bool {
        self.keys.len() > MIN_KEYS
    }
}

impl<K: Ord + Clone> Node<K> {
    // ========================================================================
    // Search
    // ========================================================================

    /// Rightmost position `i` with `keys[i] <= key`, or `None` if every key
    /// is greater.
    ///
    /// Insertion and lookup descend into `children[i + 1]` (or `children[0]`
    /// for `None`).
    #[inline]
    pub(crate) fn lower_bound_inclusive(&self, key: &K) -> Option<usize> {
        self.keys.partition_point(|k| k <= key).checked_sub(1)
    }

    /// Leftmost position `i` with `keys[i] >= key` (`keys.len()` if none).
    #[inline]
    pub(crate) fn lower_bound_exclusive(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Child slot that insertion and lookup descend into for `key`.
    #[inline]
    pub(crate) fn descent_index(&self, key: &K) -> usize {
        self.lower_bound_inclusive(key).map_or(0, |i| i + 1)
    }

    // ========================================================================
    // Insert path
    // ========================================================================

    /// Insert `key` into the subtree rooted here.
    ///
    /// Any full child on the way down is split before it is entered, so the
    /// leaf that finally receives the key always has room. Equal keys land
    /// after existing ones.
    ///
    /// # Errors
    /// - `Error::AllocationFailed` if a split or the leaf slot cannot be
    ///   reserved. Nothing is modified in that case.
    pub(crate) fn insert_into_non_full(&mut self, key: K) -> Result<()> {
        let mut spares = Vec::new();
        self.reserve_insert(&key, &mut spares)?;
        self.insert_reserved(key, &mut spares.into_iter());
        Ok(())
    }

    /// Fallible half of an insert into this non-full node.
    ///
    /// Walks the path `key` will take and, without changing any keys or
    /// children, reserves everything the insert will need: one empty sibling
    /// per split (pushed onto `spares` top-down), a separator and child slot
    /// in each parent of a split, and the key slot in the receiving leaf.
    pub(crate) fn reserve_insert(&mut self, key: &K, spares: &mut Vec<Node<K>>) -> Result<()> {
        debug_assert!(!self.is_full(), "insert into full node");

        if self.is_leaf {
            return self
                .keys
                .try_reserve(1)
                .map_err(Error::alloc("leaf key slot"));
        }

        let index = self.descent_index(key);
        if !self.children[index].is_full() {
            return self.children[index].reserve_insert(key, spares);
        }

        self.keys
            .try_reserve(1)
            .map_err(Error::alloc("separator slot"))?;
        self.children
            .try_reserve(1)
            .map_err(Error::alloc("child slot"))?;
        self.children[index].reserve_split(key, spares)
    }

    /// Like [`reserve_insert`](Self::reserve_insert), for a full node that
    /// its parent will split before descending.
    ///
    /// Both halves of a split node have spare room, so only the sibling and
    /// the path below need reserving.
    pub(crate) fn reserve_split(&mut self, key: &K, spares: &mut Vec<Node<K>>) -> Result<()> {
        debug_assert!(self.is_full(), "split of non-full node");

        spares
            .try_reserve(1)
            .map_err(Error::alloc("split sibling"))?;
        spares.push(Node::with_capacity(self.is_leaf)?);

        if self.is_leaf {
            return Ok(());
        }

        let next = self.descent_index_after_split(key);
        let grandchild = &mut self.children[next];
        if grandchild.is_full() {
            grandchild.reserve_split(key, spares)
        } else {
            grandchild.reserve_insert(key, spares)
        }
    }

    /// Child slot `key` reaches in this full node once it has been split and
    /// the key routed to one half.
    ///
    /// Differs from [`descent_index`](Self::descent_index) only when `key`
    /// equals the median: the median stays with the left half.
    fn descent_index_after_split(&self, key: &K) -> usize {
        let median = &self.keys[BRANCHING_FACTOR - 1];
        if key > median {
            BRANCHING_FACTOR + self.keys[BRANCHING_FACTOR..].partition_point(|k| k <= key)
        } else {
            self.keys[..BRANCHING_FACTOR - 1].partition_point(|k| k <= key)
        }
    }

    /// Infallible half of an insert: apply the descent that
    /// [`reserve_insert`](Self::reserve_insert) prepared, taking one
    /// reserved sibling per split.
    pub(crate) fn insert_reserved(&mut self, key: K, spares: &mut impl Iterator<Item = Node<K>>) {
        debug_assert!(!self.is_full(), "insert into full node");

        let mut index = self.descent_index(&key);

        if self.is_leaf {
            self.keys.insert(index, key);
            return;
        }

        if self.children[index].is_full() {
            self.split_child_reserved(index, spares);
            // The promoted median now sits at keys[index]
            if key > self.keys[index] {
                index += 1;
            }
        }

        self.children[index].insert_reserved(key, spares)
    }

    /// Split the full child at `child_index` using the next reserved sibling.
    pub(crate) fn split_child_reserved(
        &mut self,
        child_index: usize,
        spares: &mut impl Iterator<Item = Node<K>>,
    ) {
        let Some(sibling) = spares.next() else {
            unreachable!("split without a reserved sibling");
        };
        self.split_child_into(child_index, sibling);
    }

    /// Split the full child at `child_index` around its median, moving its
    /// upper half into the pre-allocated, empty `sibling`.
    ///
    /// ```text
    ///   before:   [ .. a .. ]              after:   [ .. a  m .. ]
    ///                  |                                 |    \
    ///       [ l0 l1 m r0 r1 ]                       [ l0 l1 ] [ r0 r1 ]
    /// ```
    pub(crate) fn split_child_into(&mut self, child_index: usize, mut sibling: Node<K>) {
        let child = &mut self.children[child_index];
        debug_assert!(child.is_full(), "split of non-full child");
        debug_assert!(sibling.keys.is_empty() && sibling.is_leaf == child.is_leaf);

        sibling.keys.extend(child.keys.drain(BRANCHING_FACTOR..));
        if !child.is_leaf {
            sibling
                .children
                .extend(child.children.drain(BRANCHING_FACTOR..));
        }
        let median = child.keys.remove(BRANCHING_FACTOR - 1);

        self.keys.insert(child_index, median);
        self.children.insert(child_index + 1, sibling);

        trace_log!(child_index, "split child");
    }

    // ========================================================================
    // Delete path
    // ========================================================================

    /// Remove one key equal to `key` from the subtree rooted here.
    ///
    /// Returns `false` if no such key exists. Every child is topped up to at
    /// least `t` keys before it is entered, so removal from a leaf never
    /// leaves it underfull. Refills done on the way to a missing key only
    /// move keys around; the stored keys are unchanged.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        let index = self.lower_bound_exclusive(key);

        if index < self.keys.len() && self.keys[index] == *key {
            if self.is_leaf {
                self.keys.remove(index);
                return true;
            }
            return self.remove_internal_key(index, key);
        }

        if self.is_leaf {
            return false;
        }

        let index = self.refill_child(index);
        self.children[index].remove(key)
    }

    /// Decide how to remove `keys[index]` from this internal node.
    pub(crate) fn delete_case(&self, index: usize) -> DeleteCase {
        if self.children[index].can_spare_key() {
            DeleteCase::Predecessor
        } else if self.children[index + 1].can_spare_key() {
            DeleteCase::Successor
        } else {
            DeleteCase::Merge
        }
    }

    fn remove_internal_key(&mut self, index: usize, key: &K) -> bool {
        match self.delete_case(index) {
            DeleteCase::Predecessor => {
                let predecessor = self.predecessor(index).clone();
                self.keys[index] = predecessor.clone();
                let removed = self.children[index].remove(&predecessor);
                debug_assert!(removed, "predecessor vanished");
                removed
            }
            DeleteCase::Successor => {
                let successor = self.successor(index).clone();
                self.keys[index] = successor.clone();
                let removed = self.children[index + 1].remove(&successor);
                debug_assert!(removed, "successor vanished");
                removed
            }
            DeleteCase::Merge => {
                self.merge(index);
                self.children[index].remove(key)
            }
        }
    }

    /// Largest key in the subtree of `children[index]`.
    pub(crate) fn predecessor(&self, index: usize) -> &K {
        let mut node = &self.children[index];
        while !node.is_leaf {
            node = &node.children[node.children.len() - 1];
        }
        &node.keys[node.keys.len() - 1]
    }

    /// Smallest key in the subtree of `children[index + 1]`.
    pub(crate) fn successor(&self, index: usize) -> &K {
        let mut node = &self.children[index + 1];
        while !node.is_leaf {
            node = &node.children[0];
        }
        &node.keys[0]
    }

    /// Decide how to bring `children[index]` up to at least `t` keys.
    ///
    /// Borrowing is preferred over merging, and the left sibling over the
    /// right one.
    pub(crate) fn refill_plan(&self, index: usize) -> Refill {
        if self.children[index].can_spare_key() {
            return Refill::NotNeeded;
        }

        let has_prev = index > 0;
        let has_next = index < self.keys.len();

        if has_prev && self.children[index - 1].can_spare_key() {
            Refill::BorrowFromPrev
        } else if has_next && self.children[index + 1].can_spare_key() {
            Refill::BorrowFromNext
        } else if has_next {
            Refill::MergeWithNext
        } else {
            Refill::MergeWithPrev
        }
    }

    /// Top up `children[index]` and return the slot now holding its keys.
    fn refill_child(&mut self, index: usize) -> usize {
        match self.refill_plan(index) {
            Refill::NotNeeded => index,
            Refill::BorrowFromPrev => {
                self.borrow_from_prev(index);
                index
            }
            Refill::BorrowFromNext => {
                self.borrow_from_next(index);
                index
            }
            Refill::MergeWithNext => {
                self.merge(index);
                index
            }
            Refill::MergeWithPrev => {
                self.merge(index - 1);
                index - 1
            }
        }
    }

    /// Rotate right: the left sibling's last key moves up into the
    /// separator, and the old separator moves down to the front of
    /// `children[index]`, along with the sibling's last child.
    pub(crate) fn borrow_from_prev(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index);
        let sibling = &mut left[index - 1];
        let child = &mut right[0];

        let lifted = sibling.keys.remove(sibling.keys.len() - 1);
        let separator = mem::replace(&mut self.keys[index - 1], lifted);
        child.keys.insert(0, separator);

        if !child.is_leaf {
            let moved = sibling.children.remove(sibling.children.len() - 1);
            child.children.insert(0, moved);
        }

        trace_log!(index, "borrowed from left sibling");
    }

    /// Rotate left: mirror image of [`borrow_from_prev`](Self::borrow_from_prev).
    pub(crate) fn borrow_from_next(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index + 1);
        let child = &mut left[index];
        let sibling = &mut right[0];

        let lifted = sibling.keys.remove(0);
        let separator = mem::replace(&mut self.keys[index], lifted);
        child.keys.push(separator);

        if !child.is_leaf {
            child.children.push(sibling.children.remove(0));
        }

        trace_log!(index, "borrowed from right sibling");
    }

    /// Fuse `children[index + 1]` and separator `keys[index]` into
    /// `children[index]`. The right sibling is consumed.
    pub(crate) fn merge(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let Node {
            keys: absorbed_keys,
            children: absorbed_children,
            ..
        } = self.children.remove(index + 1);

        let child = &mut self.children[index];
        child.keys.push(separator);
        child.keys.extend(absorbed_keys);
        child.children.extend(absorbed_children);

        debug_assert!(child.keys.len() <= MAX_KEYS, "merge overflow");
        trace_log!(index, "merged siblings");
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
impl<K: Ord + Clone> Node<K> {
    /// Build a leaf from a key list.
    pub(crate) fn leaf(keys: Vec<K>) -> Self {
        Self {
            is_leaf: true,
            keys,
            children: Vec::new(),
        }
    }

    /// Build an internal node from keys and children.
    pub(crate) fn internal(keys: Vec<K>, children: Vec<Node<K>>) -> Self {
        assert_eq!(children.len(), keys.len() + 1);
        Self {
            is_leaf: false,
            keys,
            children,
        }
    }

    /// Check every structural invariant below this node and append its keys
    /// in order to `out`. Returns the subtree height.
    ///
    /// Separator bounds are checked inclusively on both sides, since equal
    /// keys may sit on either side of an equal separator.
    pub(crate) fn validate(
        &self,
        is_root: bool,
        lo: Option<&K>,
        hi: Option<&K>,
        out: &mut Vec<K>,
    ) -> usize {
        assert!(self.keys.len() <= MAX_KEYS, "node overflow");
        if !is_root {
            assert!(self.keys.len() >= MIN_KEYS, "node underflow");
        }
        assert!(self.keys.windows(2).all(|w| w[0] <= w[1]), "keys out of order");
        if let (Some(lo), Some(first)) = (lo, self.keys.first()) {
            assert!(lo <= first, "key below separator");
        }
        if let (Some(hi), Some(last)) = (hi, self.keys.last()) {
            assert!(last <= hi, "key above separator");
        }

        if self.is_leaf {
            assert!(self.children.is_empty(), "leaf with children");
            out.extend(self.keys.iter().cloned());
            return 1;
        }

        assert_eq!(self.children.len(), self.keys.len() + 1, "fan-out mismatch");
        let mut height = None;
        for (i, child) in self.children.iter().enumerate() {
            let child_lo = if i == 0 { lo } else { Some(&self.keys[i - 1]) };
            let child_hi = if i == self.keys.len() { hi } else { Some(&self.keys[i]) };
            let h = child.validate(false, child_lo, child_hi, out);
            assert_eq!(*height.get_or_insert(h), h, "leaves at different depths");
            if i < self.keys.len() {
                out.push(self.keys[i].clone());
            }
        }
        height.unwrap_or(0) + 1
    }
}
