//! Self-dispatching actions arranged in the shape of their duck tree.

use super::store::{Dispatched, Store};
use crate::core::ActionCreator;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// An action creator bound to a store.
pub struct BoundAction<P, St> {
    creator: ActionCreator<P>,
    store: Arc<St>,
}

impl<P, St: Store<P>> BoundAction<P, St> {
    pub(crate) fn new(creator: ActionCreator<P>, store: Arc<St>) -> Self {
        Self { creator, store }
    }

    /// Create the action and dispatch it to the store exactly once.
    ///
    /// Returns the store's value when it produced one, otherwise the
    /// dispatched action. Dispatch errors propagate unchanged.
    pub fn call(&self, payload: P) -> Result<Dispatched<P, St::Output>, St::Error> {
        let action = (self.creator)(payload);
        trace!(action_type = %action.action_type, "dispatching bound action");

        Ok(match self.store.dispatch(&action)? {
            Some(output) => Dispatched::Returned(output),
            None => Dispatched::Action(action),
        })
    }
}

impl<P, St> Clone for BoundAction<P, St> {
    fn clone(&self) -> Self {
        Self {
            creator: Arc::clone(&self.creator),
            store: Arc::clone(&self.store),
        }
    }
}

impl<P, St> fmt::Debug for BoundAction<P, St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundAction").finish_non_exhaustive()
    }
}

/// A node of a bound tree.
pub enum BoundNode<P, St> {
    Action(BoundAction<P, St>),
    Branch(BoundTree<P, St>),
}

impl<P, St> Clone for BoundNode<P, St> {
    fn clone(&self) -> Self {
        match self {
            Self::Action(action) => Self::Action(action.clone()),
            Self::Branch(tree) => Self::Branch(tree.clone()),
        }
    }
}

impl<P, St> fmt::Debug for BoundNode<P, St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => fmt::Debug::fmt(action, f),
            Self::Branch(tree) => fmt::Debug::fmt(tree, f),
        }
    }
}

/// Bound actions mirroring the keys, nesting and order of a duck tree.
pub struct BoundTree<P, St> {
    nodes: IndexMap<String, BoundNode<P, St>>,
}

impl<P, St> BoundTree<P, St> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: String, node: BoundNode<P, St>) {
        self.nodes.insert(key, node);
    }

    pub fn get(&self, key: &str) -> Option<&BoundNode<P, St>> {
        self.nodes.get(key)
    }

    /// Bound action stored directly under `key`.
    pub fn action(&self, key: &str) -> Option<&BoundAction<P, St>> {
        match self.nodes.get(key)? {
            BoundNode::Action(action) => Some(action),
            BoundNode::Branch(_) => None,
        }
    }

    /// Nested group stored under `key`.
    pub fn branch(&self, key: &str) -> Option<&BoundTree<P, St>> {
        match self.nodes.get(key)? {
            BoundNode::Branch(tree) => Some(tree),
            BoundNode::Action(_) => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundNode<P, St>)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<P, St> Clone for BoundTree<P, St> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<P, St> fmt::Debug for BoundTree<P, St> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}
