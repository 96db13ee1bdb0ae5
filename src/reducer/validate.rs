//! Leaf validation for reducer composition.
//!
//! Every flattened leaf is checked independently and the failures are
//! accumulated with `Validation`, so one composition attempt reports all
//! malformed ducks instead of only the first.

use crate::core::{DuckError, Leaf, ReduceFn};
use indexmap::IndexMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A leaf that passed validation and can enter the dispatch table.
pub(crate) struct ValidDuck<S, P> {
    pub key: String,
    pub action_type: String,
    pub reduce: ReduceFn<S, P>,
}

/// Check a single flattened leaf.
pub(crate) fn validate_leaf<S, P>(
    key: &str,
    leaf: &Leaf<S, P>,
) -> Validation<ValidDuck<S, P>, NonEmptyVec<DuckError>> {
    let Some(reduce) = leaf.reducer() else {
        return Validation::fail(DuckError::MissingReducer {
            key: key.to_string(),
        });
    };

    match leaf.action_type() {
        Some(action_type) if !action_type.is_empty() => Validation::success(ValidDuck {
            key: key.to_string(),
            action_type: action_type.to_string(),
            reduce: reduce.clone(),
        }),
        _ => Validation::fail(DuckError::MissingActionType {
            key: key.to_string(),
        }),
    }
}

/// Check every flattened leaf, accumulating ALL failures.
pub(crate) fn validate_leaves<S, P>(
    flat: &IndexMap<String, Leaf<S, P>>,
) -> Result<Vec<ValidDuck<S, P>>, Vec<DuckError>> {
    let checks: Vec<_> = flat
        .iter()
        .map(|(key, leaf)| validate_leaf(key, leaf))
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(valid) => Ok(valid),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
