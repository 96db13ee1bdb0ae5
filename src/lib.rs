//! Ducktree: composable ducks for reducer-driven state
//!
//! A duck bundles an action type, an action creator and a transition
//! function. Ducktree composes arbitrarily nested trees of ducks in two
//! ways: into one pure reducer keyed by action type, and into a mirror tree
//! of actions that dispatch themselves to a store.
//!
//! # Core Concepts
//!
//! - **Duck**: `create(payload) -> Action` plus an action type and a reducer
//! - **DuckTree**: ordered, validated nesting of ducks and action creators
//! - **Reducer**: pure `(state, action) -> state` over an immutable dispatch table
//! - **BoundTree**: the tree's shape, with every leaf dispatching to a store
//!
//! The crate does not hold state itself. Stores are external and plug in
//! through the [`Store`] trait.
//!
//! # Example
//!
//! ```rust
//! use ducktree::{create_duck, create_reducer, duck_tree, Action};
//!
//! let tree = duck_tree! {
//!     add: create_duck("ADD", |s: i64, p: i64| s + p),
//!     scale: {
//!         double: create_duck("DOUBLE", |s: i64, _: i64| s * 2),
//!     },
//! }
//! .unwrap();
//!
//! let reducer = create_reducer(&tree, 0).unwrap();
//!
//! let state = reducer.reduce(0, Action::new("ADD", 5));
//! let state = reducer.reduce(state, Action::new("DOUBLE", 0));
//! assert_eq!(state, 10);
//! assert_eq!(reducer.dispatch_table().key_for("DOUBLE"), Some("scale_double"));
//! ```

pub mod builder;
pub mod core;
pub mod dispatch;
pub mod reducer;

// Re-export commonly used types
pub use builder::DuckTreeBuilder;
pub use core::{
    create_duck, flatten, Action, ActionCreator, ConfigurationError, Duck, DuckError, DuckTree,
    IntoDuckTree, Leaf, RawNode, ReduceFn, TreeNode,
};
pub use dispatch::{
    create_dispatched_actions, BoundAction, BoundNode, BoundTree, Dispatched, Store,
};
pub use reducer::{create_reducer, create_reducer_default, DispatchTable, Reducer};
