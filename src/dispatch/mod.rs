//! Binding of duck trees to a store.
//!
//! [`create_dispatched_actions`] walks a tree without flattening it and
//! wraps every leaf so that calling it also dispatches the created action.
//! The resulting [`BoundTree`] mirrors the input tree key for key.

mod bound;
mod store;

pub use bound::{BoundAction, BoundNode, BoundTree};
pub use store::{Dispatched, Store};

use crate::core::{ConfigurationError, DuckTree, IntoDuckTree, TreeNode};
use std::sync::Arc;
use tracing::debug;

/// Bind every leaf of `tree` to `store`.
///
/// Bare action creators are accepted; only the tree's shape is checked,
/// when raw input is converted into a [`DuckTree`]. Binding never touches
/// the store; each later call of a bound action dispatches exactly once.
///
/// # Example
///
/// ```rust
/// use ducktree::{
///     create_dispatched_actions, create_duck, Action, Dispatched, DuckTreeBuilder, Store,
/// };
/// use std::convert::Infallible;
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<Action<i64>>>);
///
/// impl Store<i64> for Recorder {
///     type Output = ();
///     type Error = Infallible;
///
///     fn dispatch(&self, action: &Action<i64>) -> Result<Option<()>, Infallible> {
///         self.0.lock().unwrap().push(action.clone());
///         Ok(None)
///     }
/// }
///
/// let store = Arc::new(Recorder::default());
/// let tree = DuckTreeBuilder::new().duck("inc", create_duck("ADD", |s: i64, p: i64| s + p));
/// let bound = create_dispatched_actions(tree, Arc::clone(&store)).unwrap();
///
/// let outcome = bound.action("inc").unwrap().call(1).unwrap();
/// assert_eq!(outcome, Dispatched::Action(Action::new("ADD", 1)));
/// assert_eq!(store.0.lock().unwrap().len(), 1);
/// ```
pub fn create_dispatched_actions<S, P, St, T>(
    tree: T,
    store: Arc<St>,
) -> Result<BoundTree<P, St>, ConfigurationError>
where
    S: 'static,
    P: 'static,
    St: Store<P>,
    T: IntoDuckTree<S, P>,
{
    let tree = tree.into_duck_tree()?;
    let bound = bind_tree(&tree, &store);

    debug!(entries = bound.len(), "bound duck tree to store");

    Ok(bound)
}

fn bind_tree<S, P, St>(tree: &DuckTree<S, P>, store: &Arc<St>) -> BoundTree<P, St>
where
    S: 'static,
    P: 'static,
    St: Store<P>,
{
    let mut bound = BoundTree::new();

    for (key, node) in tree.iter() {
        let node = match node {
            TreeNode::Leaf(leaf) => {
                BoundNode::Action(BoundAction::new(leaf.to_creator(), Arc::clone(store)))
            }
            TreeNode::Branch(branch) => BoundNode::Branch(bind_tree(branch, store)),
        };
        bound.insert(key.to_string(), node);
    }

    bound
}
