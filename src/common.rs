//! Defines some common types and functions used in this library.

/// Defines the depth and the direction in a tree.
pub mod tree;

/// Defines some checker functions.
pub(crate) mod checker;


pub use tree::{Depth, LeftRight};
