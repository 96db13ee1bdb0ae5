//! Property-based tests for duck composition.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use ducktree::{create_duck, create_reducer, flatten, Action, Duck, DuckTreeBuilder};
use proptest::prelude::*;

fn add_duck(action_type: &str) -> Duck<i64, i64> {
    create_duck(action_type, |s: i64, p: i64| s.wrapping_add(p))
}

prop_compose! {
    fn arbitrary_action_type()(name in "[A-Z][A-Z_]{0,11}") -> String {
        name
    }
}

prop_compose! {
    fn arbitrary_action()(
        action_type in prop_oneof![
            Just("ADD".to_string()),
            Just("SUB".to_string()),
            arbitrary_action_type()
        ],
        payload in any::<i64>()
    ) -> Action<i64> {
        Action::new(action_type, payload)
    }
}

fn counter_tree() -> DuckTreeBuilder<i64, i64> {
    DuckTreeBuilder::new()
        .duck("add", add_duck("ADD"))
        .branch(
            "inverse",
            DuckTreeBuilder::new().duck(
                "sub",
                create_duck("SUB", |s: i64, p: i64| s.wrapping_sub(p)),
            ),
        )
}

proptest! {
    #[test]
    fn duck_creates_its_own_action(
        action_type in arbitrary_action_type(),
        payload in any::<i64>()
    ) {
        let duck = add_duck(&action_type);
        prop_assert_eq!(duck.create(payload), Action::new(action_type, payload));
    }

    #[test]
    fn reducer_is_deterministic(state in any::<i64>(), action in arbitrary_action()) {
        let reducer = create_reducer(counter_tree(), 0).unwrap();

        let first = reducer.reduce(state, action.clone());
        let second = reducer.reduce(state, action);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_actions_are_identity(state in any::<i64>(), payload in any::<i64>()) {
        let reducer = create_reducer(counter_tree(), 0).unwrap();

        prop_assert_eq!(reducer.reduce(state, Action::new("UNKNOWN", payload)), state);
    }

    #[test]
    fn table_has_one_entry_per_leaf(
        types in prop::collection::btree_set(arbitrary_action_type(), 0..12)
    ) {
        // Spread the ducks over two levels to exercise flattening.
        let mut top = DuckTreeBuilder::new();
        let mut nested = DuckTreeBuilder::new();
        for (i, action_type) in types.iter().enumerate() {
            let key = format!("k{i}");
            if i % 2 == 0 {
                top = top.duck(key, add_duck(action_type));
            } else {
                nested = nested.duck(key, add_duck(action_type));
            }
        }
        let tree = top.branch("nested", nested).build().unwrap();

        let flat_len = flatten(&tree).unwrap().len();
        let reducer = create_reducer(&tree, 0).unwrap();
        let table = reducer.dispatch_table();

        prop_assert_eq!(flat_len, types.len());
        prop_assert_eq!(table.len(), types.len());
        for action_type in &types {
            prop_assert!(table.contains(action_type));
        }
    }

    #[test]
    fn nesting_depth_joins_keys(depth in 1usize..8) {
        let mut builder = DuckTreeBuilder::new().duck("leaf", add_duck("LEAF"));
        for level in (0..depth).rev() {
            builder = DuckTreeBuilder::new().branch(format!("l{level}"), builder);
        }
        let tree = builder.build().unwrap();

        let flat = flatten(&tree).unwrap();
        let mut expected: Vec<String> = (0..depth).map(|level| format!("l{level}")).collect();
        expected.push("leaf".to_string());

        prop_assert_eq!(flat.len(), 1);
        prop_assert_eq!(flat.keys().next().unwrap(), &expected.join("_"));
    }

    #[test]
    fn action_roundtrip_serialization(action in arbitrary_action()) {
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(action, deserialized);
    }
}
