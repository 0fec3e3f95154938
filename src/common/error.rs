//! Error types for btreelib.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in btreelib.
///
/// Lookups and removals of absent keys are not errors: they are reported
/// through their `bool` return values. The only runtime failure left is
/// running out of memory while growing the tree.
#[derive(Debug, Error)]
pub enum Error {
    /// Memory for a node, key slot or child slot could not be reserved.
    ///
    /// An insert reserves everything it needs before touching the tree, so
    /// the tree is unchanged when this is returned.
    #[error("allocation failed while reserving {what}: {source}")]
    AllocationFailed {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl Error {
    /// Wrap a failed reservation, naming what was being reserved.
    pub(crate) fn alloc(what: &'static str) -> impl FnOnce(TryReserveError) -> Error {
        move |source| Error::AllocationFailed { what, source }
    }
}
