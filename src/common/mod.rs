//! Common types and utilities shared across btreelib.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (branching factor and derived node bounds)
//! - Error types
//! - The numeric key type used at the binding boundary

pub mod config;
pub mod error;
mod key;

pub use error::{Error, Result};
pub use key::OrderedF64;
