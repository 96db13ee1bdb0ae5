//! Builder API for ergonomic duck tree construction.
//!
//! This module provides a fluent builder and the [`duck_tree!`](crate::duck_tree)
//! macro. Both collect raw entries and defer validation to a single
//! conversion step at the tree boundary.

pub mod macros;
pub mod tree;

pub use tree::DuckTreeBuilder;
