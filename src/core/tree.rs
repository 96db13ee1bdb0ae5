//! Duck trees: nested, ordered groups of ducks and action creators.
//!
//! Raw input ([`RawNode`]) is converted into the validated [`DuckTree`]
//! exactly once. After that, every traversal is exhaustive matching over
//! [`TreeNode`] with no runtime inspection of node shape.

use super::duck::{Action, ActionCreator, Duck, ReduceFn};
use super::error::ConfigurationError;
use crate::builder::DuckTreeBuilder;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Separator used when nested keys are joined into a path.
pub const PATH_SEPARATOR: &str = "_";

/// Join a parent path and a child key. `None` is the tree root.
pub(crate) fn join_path(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{key}"),
        None => key.to_string(),
    }
}

/// A callable tree leaf.
pub enum Leaf<S, P> {
    /// A full duck with an action type and a reducer.
    Duck(Duck<S, P>),

    /// A bare action creator. It can be bound to a store, but it cannot
    /// take part in a reducer.
    Creator(ActionCreator<P>),
}

impl<S, P> Leaf<S, P> {
    pub fn create(&self, payload: P) -> Action<P> {
        match self {
            Self::Duck(duck) => duck.create(payload),
            Self::Creator(creator) => creator(payload),
        }
    }

    /// Action type, if this leaf carries one.
    pub fn action_type(&self) -> Option<&str> {
        match self {
            Self::Duck(duck) => Some(duck.action_type()),
            Self::Creator(_) => None,
        }
    }

    pub fn reducer(&self) -> Option<&ReduceFn<S, P>> {
        match self {
            Self::Duck(duck) => Some(duck.reducer()),
            Self::Creator(_) => None,
        }
    }
}

impl<S: 'static, P: 'static> Leaf<S, P> {
    /// Shared action creator for this leaf.
    pub(crate) fn to_creator(&self) -> ActionCreator<P> {
        match self {
            Self::Duck(duck) => {
                let duck = duck.clone();
                Arc::new(move |payload| duck.create(payload))
            }
            Self::Creator(creator) => Arc::clone(creator),
        }
    }
}

impl<S, P> Clone for Leaf<S, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Duck(duck) => Self::Duck(duck.clone()),
            Self::Creator(creator) => Self::Creator(Arc::clone(creator)),
        }
    }
}

impl<S, P> fmt::Debug for Leaf<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duck(duck) => f.debug_tuple("Duck").field(duck).finish(),
            Self::Creator(_) => f.write_str("Creator"),
        }
    }
}

impl<S, P> From<Duck<S, P>> for Leaf<S, P> {
    fn from(duck: Duck<S, P>) -> Self {
        Self::Duck(duck)
    }
}

/// A validated tree node.
pub enum TreeNode<S, P> {
    Leaf(Leaf<S, P>),
    Branch(DuckTree<S, P>),
}

impl<S, P> Clone for TreeNode<S, P> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(leaf) => Self::Leaf(leaf.clone()),
            Self::Branch(tree) => Self::Branch(tree.clone()),
        }
    }
}

impl<S, P> fmt::Debug for TreeNode<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => fmt::Debug::fmt(leaf, f),
            Self::Branch(tree) => fmt::Debug::fmt(tree, f),
        }
    }
}

/// Unvalidated tree input.
pub enum RawNode<S, P> {
    Duck(Duck<S, P>),
    Creator(ActionCreator<P>),
    Tree(Vec<(String, RawNode<S, P>)>),

    /// Any value that is neither callable nor a nested tree. Always
    /// rejected at the boundary.
    Value(serde_json::Value),
}

impl<S, P> From<Duck<S, P>> for RawNode<S, P> {
    fn from(duck: Duck<S, P>) -> Self {
        Self::Duck(duck)
    }
}

impl<S, P> From<DuckTreeBuilder<S, P>> for RawNode<S, P> {
    fn from(builder: DuckTreeBuilder<S, P>) -> Self {
        Self::Tree(builder.into_entries())
    }
}

/// An ordered, validated tree of ducks.
///
/// Trees are owned values, so they are always finite and acyclic.
pub struct DuckTree<S, P> {
    nodes: IndexMap<String, TreeNode<S, P>>,
}

impl<S, P> DuckTree<S, P> {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Convert raw entries into a validated tree.
    ///
    /// Fails on the first value that is neither callable nor a nested tree,
    /// or on a key repeated among siblings. Errors carry the full
    /// underscore-joined path of the offending entry.
    pub fn from_raw(entries: Vec<(String, RawNode<S, P>)>) -> Result<Self, ConfigurationError> {
        Self::from_raw_at(None, entries)
    }

    fn from_raw_at(
        prefix: Option<&str>,
        entries: Vec<(String, RawNode<S, P>)>,
    ) -> Result<Self, ConfigurationError> {
        let mut nodes = IndexMap::with_capacity(entries.len());

        for (key, raw) in entries {
            let path = join_path(prefix, &key);
            let node = match raw {
                RawNode::Duck(duck) => TreeNode::Leaf(Leaf::Duck(duck)),
                RawNode::Creator(creator) => TreeNode::Leaf(Leaf::Creator(creator)),
                RawNode::Tree(children) => {
                    TreeNode::Branch(Self::from_raw_at(Some(&path), children)?)
                }
                RawNode::Value(_) => {
                    return Err(ConfigurationError::NotFunctionNorObject { key: path });
                }
            };

            match nodes.entry(key) {
                Entry::Occupied(_) => return Err(ConfigurationError::DuplicateKey { key: path }),
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }

        Ok(Self { nodes })
    }

    pub fn get(&self, key: &str) -> Option<&TreeNode<S, P>> {
        self.nodes.get(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate direct children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode<S, P>)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }
}

impl<S, P> Default for DuckTree<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P> Clone for DuckTree<S, P> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<S, P> fmt::Debug for DuckTree<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}

/// Anything that can be turned into a validated [`DuckTree`].
pub trait IntoDuckTree<S, P> {
    fn into_duck_tree(self) -> Result<DuckTree<S, P>, ConfigurationError>;
}

impl<S, P> IntoDuckTree<S, P> for DuckTree<S, P> {
    fn into_duck_tree(self) -> Result<DuckTree<S, P>, ConfigurationError> {
        Ok(self)
    }
}

impl<S, P> IntoDuckTree<S, P> for &DuckTree<S, P> {
    fn into_duck_tree(self) -> Result<DuckTree<S, P>, ConfigurationError> {
        Ok(self.clone())
    }
}

impl<S, P> IntoDuckTree<S, P> for DuckTreeBuilder<S, P> {
    fn into_duck_tree(self) -> Result<DuckTree<S, P>, ConfigurationError> {
        self.build()
    }
}
