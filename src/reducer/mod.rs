//! Composition of duck trees into a single reducer.
//!
//! [`create_reducer`] flattens a tree, validates every leaf, and builds an
//! immutable [`DispatchTable`]. The returned [`Reducer`] is a pure function
//! of `(state, action)`: known action types are routed to their duck's
//! transition, unknown ones leave the state untouched.

mod table;
mod validate;

pub use table::DispatchTable;

use crate::core::{flatten, Action, ConfigurationError, IntoDuckTree};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Pure reducer over a fixed dispatch table.
///
/// Cloning is cheap: clones share the table and the initial state.
pub struct Reducer<S, P> {
    table: Arc<DispatchTable<S, P>>,
    initial: Arc<S>,
}

impl<S, P> Reducer<S, P> {
    /// Apply `action` to `state`.
    ///
    /// Returns `state` unchanged when no duck handles the action type.
    pub fn reduce(&self, state: S, action: Action<P>) -> S {
        match self.table.get(&action.action_type) {
            Some(reduce) => reduce(state, action.payload),
            None => {
                trace!(action_type = %action.action_type, "ignoring unknown action type");
                state
            }
        }
    }

    /// Initial state given at composition time.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn dispatch_table(&self) -> &DispatchTable<S, P> {
        &self.table
    }
}

impl<S: Clone, P> Reducer<S, P> {
    /// Apply `action`, starting from the initial state when `state` is omitted.
    pub fn reduce_or_initial(&self, state: Option<S>, action: Action<P>) -> S {
        let state = state.unwrap_or_else(|| S::clone(&self.initial));
        self.reduce(state, action)
    }
}

impl<S: 'static, P: 'static> Reducer<S, P> {
    /// Turn the reducer into a plain closure, e.g. for a store that only
    /// accepts `Fn(S, Action<P>) -> S`.
    pub fn into_fn(self) -> impl Fn(S, Action<P>) -> S + Clone {
        move |state, action| self.reduce(state, action)
    }
}

impl<S, P> Clone for Reducer<S, P> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            initial: Arc::clone(&self.initial),
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Reducer<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("table", &self.table)
            .field("initial", &self.initial)
            .finish()
    }
}

/// Compose a duck tree into a single reducer.
///
/// Every flattened leaf must be a duck with a non-empty action type, and
/// action types must be unique across the tree. All malformed leaves are
/// reported together in [`ConfigurationError::InvalidDucks`].
///
/// # Example
///
/// ```rust
/// use ducktree::{create_duck, create_reducer, Action, DuckTreeBuilder};
///
/// let tree = DuckTreeBuilder::new().duck("add", create_duck("ADD", |s: i64, p: i64| s + p));
/// let reducer = create_reducer(tree, 0).unwrap();
///
/// assert_eq!(reducer.reduce(0, Action::new("ADD", 5)), 5);
/// assert_eq!(reducer.reduce(5, Action::new("NOPE", 1)), 5);
/// ```
pub fn create_reducer<S, P, T>(
    tree: T,
    initial_state: S,
) -> Result<Reducer<S, P>, ConfigurationError>
where
    T: IntoDuckTree<S, P>,
{
    let tree = tree.into_duck_tree()?;
    let flat = flatten(&tree)?;
    let valid = validate::validate_leaves(&flat).map_err(ConfigurationError::InvalidDucks)?;

    let mut table = DispatchTable::new();
    for duck in valid {
        table.insert(duck.action_type, duck.key, duck.reduce)?;
    }

    debug!(action_types = table.len(), "composed reducer");

    Ok(Reducer {
        table: Arc::new(table),
        initial: Arc::new(initial_state),
    })
}

/// Compose a duck tree into a reducer whose initial state is `S::default()`.
pub fn create_reducer_default<S, P, T>(tree: T) -> Result<Reducer<S, P>, ConfigurationError>
where
    S: Default,
    T: IntoDuckTree<S, P>,
{
    create_reducer(tree, S::default())
}
