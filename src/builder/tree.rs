//! Builder for constructing duck trees.

use crate::core::{Action, ConfigurationError, Duck, DuckTree, RawNode};
use std::sync::Arc;

/// Builder for duck trees with a fluent API.
///
/// Entries are kept exactly as given, in insertion order. Nothing is
/// checked until [`build`](Self::build) converts them into a [`DuckTree`].
pub struct DuckTreeBuilder<S, P> {
    entries: Vec<(String, RawNode<S, P>)>,
}

impl<S, P> DuckTreeBuilder<S, P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a duck leaf.
    pub fn duck(self, key: impl Into<String>, duck: Duck<S, P>) -> Self {
        self.node(key, RawNode::Duck(duck))
    }

    /// Add a bare action creator leaf.
    ///
    /// Creators can be bound to a store but have no reducer, so a tree
    /// containing one cannot be composed into a reducer.
    pub fn creator<F>(self, key: impl Into<String>, creator: F) -> Self
    where
        F: Fn(P) -> Action<P> + Send + Sync + 'static,
    {
        self.node(key, RawNode::Creator(Arc::new(creator)))
    }

    /// Add a nested group of ducks.
    pub fn branch(self, key: impl Into<String>, branch: DuckTreeBuilder<S, P>) -> Self {
        self.node(key, branch.into())
    }

    /// Add an arbitrary value. It is rejected by [`build`](Self::build)
    /// since it is neither callable nor a nested tree.
    pub fn value(self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.node(key, RawNode::Value(value.into()))
    }

    /// Add a raw node.
    pub fn node(mut self, key: impl Into<String>, node: RawNode<S, P>) -> Self {
        self.entries.push((key.into(), node));
        self
    }

    pub(crate) fn into_entries(self) -> Vec<(String, RawNode<S, P>)> {
        self.entries
    }

    /// Validate the entries and build the tree.
    pub fn build(self) -> Result<DuckTree<S, P>, ConfigurationError> {
        DuckTree::from_raw(self.entries)
    }
}

impl<S, P> Default for DuckTreeBuilder<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{create_duck, TreeNode};

    #[test]
    fn builder_collects_entries_in_order() {
        let tree = DuckTreeBuilder::new()
            .duck("inc", create_duck("INC", |s: i32, p: i32| s + p))
            .creator("log", |p: i32| Action::new("LOG", p))
            .branch("empty", DuckTreeBuilder::new())
            .build()
            .unwrap();

        let keys: Vec<&str> = tree.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["inc", "log", "empty"]);
        assert!(matches!(tree.get("empty"), Some(TreeNode::Branch(_))));
    }

    #[test]
    fn builder_rejects_values() {
        let result = DuckTreeBuilder::<i32, i32>::new().value("bad", 42).build();

        assert_eq!(
            result.unwrap_err(),
            ConfigurationError::NotFunctionNorObject {
                key: "bad".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_nested_values_with_full_path() {
        let result = DuckTreeBuilder::<i32, i32>::new()
            .branch("settings", DuckTreeBuilder::new().value("limit", "ten"))
            .build();

        assert_eq!(result.unwrap_err().keys(), vec!["settings_limit"]);
    }

    #[test]
    fn builder_rejects_repeated_keys() {
        let result = DuckTreeBuilder::new()
            .duck("inc", create_duck("INC", |s: i32, p: i32| s + p))
            .duck("inc", create_duck("INC2", |s: i32, p: i32| s + p))
            .build();

        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateKey { ref key }) if key == "inc"
        ));
    }
}
