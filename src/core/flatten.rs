//! Flattening of nested duck trees into underscore-joined paths.

use super::error::ConfigurationError;
use super::tree::{join_path, DuckTree, Leaf, TreeNode};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Flatten a tree into an ordered map from path to leaf.
///
/// Nested keys are joined with `_`, so `{ a: { b: x } }` yields a single
/// entry `"a_b" -> x`. Empty branches contribute nothing. Two paths that
/// collapse onto the same key (a top-level `a_b` next to `a: { b }`) fail
/// with [`ConfigurationError::DuplicateKey`].
///
/// # Example
///
/// ```rust
/// use ducktree::{create_duck, flatten, DuckTreeBuilder};
///
/// let tree = DuckTreeBuilder::new()
///     .branch("a", DuckTreeBuilder::new().duck("b", create_duck("X", |s: i32, _: ()| s)))
///     .build()
///     .unwrap();
///
/// let flat = flatten(&tree).unwrap();
/// assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["a_b"]);
/// ```
pub fn flatten<S, P>(
    tree: &DuckTree<S, P>,
) -> Result<IndexMap<String, Leaf<S, P>>, ConfigurationError> {
    let mut flat = IndexMap::new();
    flatten_into(None, tree, &mut flat)?;
    Ok(flat)
}

fn flatten_into<S, P>(
    prefix: Option<&str>,
    tree: &DuckTree<S, P>,
    flat: &mut IndexMap<String, Leaf<S, P>>,
) -> Result<(), ConfigurationError> {
    for (key, node) in tree.iter() {
        let path = join_path(prefix, key);
        match node {
            TreeNode::Leaf(leaf) => match flat.entry(path) {
                Entry::Occupied(slot) => {
                    return Err(ConfigurationError::DuplicateKey {
                        key: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(leaf.clone());
                }
            },
            TreeNode::Branch(branch) => flatten_into(Some(&path), branch, flat)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DuckTreeBuilder;
    use crate::core::duck::{create_duck, Action, Duck};

    fn duck(action_type: &str) -> Duck<i32, i32> {
        create_duck(action_type, |s: i32, p: i32| s + p)
    }

    #[test]
    fn top_level_leaves_keep_their_keys() {
        let tree = DuckTreeBuilder::new()
            .duck("add", duck("ADD"))
            .duck("sub", duck("SUB"))
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();

        assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["add", "sub"]);
    }

    #[test]
    fn nested_keys_are_joined_with_underscores() {
        let tree = DuckTreeBuilder::new()
            .branch(
                "a",
                DuckTreeBuilder::new().branch("b", DuckTreeBuilder::new().duck("c", duck("DEEP"))),
            )
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();

        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a_b_c"].action_type(), Some("DEEP"));
    }

    #[test]
    fn flattened_leaf_keeps_its_reducer() {
        let tree = DuckTreeBuilder::new()
            .branch("a", DuckTreeBuilder::new().duck("b", duck("X")))
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();
        let reduce = flat["a_b"].reducer().unwrap();

        assert_eq!(reduce(2, 3), 5);
    }

    #[test]
    fn empty_branches_flatten_to_nothing() {
        let tree = DuckTreeBuilder::<i32, i32>::new()
            .branch("empty", DuckTreeBuilder::new())
            .build()
            .unwrap();

        assert!(flatten(&tree).unwrap().is_empty());
    }

    #[test]
    fn colliding_paths_fail() {
        let tree = DuckTreeBuilder::new()
            .duck("a_b", duck("ONE"))
            .branch("a", DuckTreeBuilder::new().duck("b", duck("TWO")))
            .build()
            .unwrap();

        assert_eq!(
            flatten(&tree).unwrap_err(),
            ConfigurationError::DuplicateKey {
                key: "a_b".to_string()
            }
        );
    }

    #[test]
    fn empty_branch_key_keeps_its_separator() {
        let tree = DuckTreeBuilder::new()
            .branch("", DuckTreeBuilder::new().duck("b", duck("X")))
            .duck("b", duck("Y"))
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();

        assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["_b", "b"]);
        assert_eq!(flat["_b"].action_type(), Some("X"));
        assert_eq!(flat["b"].action_type(), Some("Y"));
    }

    #[test]
    fn creators_are_flattened_like_ducks() {
        let tree = DuckTreeBuilder::<i32, i32>::new()
            .branch(
                "net",
                DuckTreeBuilder::new().creator("ping", |p: i32| Action::new("PING", p)),
            )
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();

        assert!(matches!(flat["net_ping"], Leaf::Creator(_)));
    }

    #[test]
    fn order_follows_depth_first_insertion() {
        let tree = DuckTreeBuilder::new()
            .duck("first", duck("1"))
            .branch(
                "group",
                DuckTreeBuilder::new()
                    .duck("x", duck("2"))
                    .duck("y", duck("3")),
            )
            .duck("last", duck("4"))
            .build()
            .unwrap();

        let flat = flatten(&tree).unwrap();

        assert_eq!(
            flat.keys().collect::<Vec<_>>(),
            vec!["first", "group_x", "group_y", "last"]
        );
    }
}
