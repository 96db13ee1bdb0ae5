//! Core duck types and tree logic.
//!
//! This module contains the pure composition core:
//! - Ducks and actions
//! - The validated duck tree and its raw-input boundary
//! - Flattening of nested trees into underscore-joined paths
//!
//! Nothing in this module has side effects.

mod duck;
mod error;
mod flatten;
mod tree;

pub use duck::{create_duck, Action, ActionCreator, Duck, ReduceFn};
pub use error::{ConfigurationError, DuckError};
pub use flatten::flatten;
pub use tree::{DuckTree, IntoDuckTree, Leaf, RawNode, TreeNode, PATH_SEPARATOR};
