//! Numeric key type.

use std::cmp::Ordering;
use std::fmt;

/// A double-precision key with a total order.
///
/// `f64` is only `PartialOrd`, but the B-tree needs `Ord`. Ordering follows
/// [`f64::total_cmp`], so every value (including NaN) has a fixed position.
///
/// NaN keys are a caller precondition violation. They are stored and found
/// deterministically, but no ordering guarantee relative to numbers is made.
/// Note that `-0.0` and `0.0` are distinct keys under this order.
///
/// # Example
/// ```
/// use btreelib::OrderedF64;
///
/// let a = OrderedF64::new(1.5);
/// let b = OrderedF64::new(2.0);
/// assert!(a < b);
/// assert_eq!(a.get(), 1.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderedF64(f64);

impl OrderedF64 {
    /// Create a new key.
    #[inline]
    pub fn new(value: f64) -> Self {
        OrderedF64(value)
    }

    /// The wrapped value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for OrderedF64 {
    fn from(value: f64) -> Self {
        OrderedF64(value)
    }
}

impl fmt::Display for OrderedF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
