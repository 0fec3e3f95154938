//! Configuration constants for btreelib.

/// Branching parameter `t` of the B-tree.
///
/// Every non-root node holds between `t - 1` and `2t - 1` keys, and every
/// non-root internal node has between `t` and `2t` children.
///
/// # Fan-out
/// With `t = 3`:
/// - Max keys per node: 5
/// - Min keys per non-root node: 2
/// - Max children per internal node: 6
pub const BRANCHING_FACTOR: usize = 3;

/// Maximum number of keys a node may hold (`2t - 1`).
///
/// A node at this size is "full" and is split before it receives another key.
pub const MAX_KEYS: usize = 2 * BRANCHING_FACTOR - 1;

/// Minimum number of keys a non-root node may hold (`t - 1`).
pub const MIN_KEYS: usize = BRANCHING_FACTOR - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branching_factor_is_valid() {
        // t = 1 would allow nodes with zero keys
        assert!(BRANCHING_FACTOR >= 2);
    }

    #[test]
    fn test_derived_bounds() {
        assert_eq!(MAX_KEYS, 5);
        assert_eq!(MIN_KEYS, 2);
        // A split of a full node yields two minimal nodes plus the median.
        assert_eq!(MIN_KEYS * 2 + 1, MAX_KEYS);
    }
}
