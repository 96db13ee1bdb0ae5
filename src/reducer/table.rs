//! Dispatch table from action type to transition function.

use crate::core::{ConfigurationError, ReduceFn};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;

struct TableEntry<S, P> {
    key: String,
    reduce: ReduceFn<S, P>,
}

/// Immutable lookup from action type to reducer.
///
/// Each entry remembers the flattened tree key that registered it, so
/// diagnostics can point back at the duck definition.
pub struct DispatchTable<S, P> {
    entries: IndexMap<String, TableEntry<S, P>>,
}

impl<S, P> DispatchTable<S, P> {
    pub(crate) fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register `reduce` for `action_type`.
    ///
    /// Fails if another key already registered the same action type.
    pub(crate) fn insert(
        &mut self,
        action_type: String,
        key: String,
        reduce: ReduceFn<S, P>,
    ) -> Result<(), ConfigurationError> {
        match self.entries.entry(action_type) {
            Entry::Occupied(existing) => Err(ConfigurationError::DuplicateActionType {
                action_type: existing.key().clone(),
                first: existing.get().key.clone(),
                second: key,
            }),
            Entry::Vacant(slot) => {
                slot.insert(TableEntry { key, reduce });
                Ok(())
            }
        }
    }

    /// Reducer registered for `action_type`.
    pub fn get(&self, action_type: &str) -> Option<&ReduceFn<S, P>> {
        self.entries.get(action_type).map(|entry| &entry.reduce)
    }

    /// Check if `action_type` has a reducer.
    pub fn contains(&self, action_type: &str) -> bool {
        self.entries.contains_key(action_type)
    }

    /// Flattened tree key that registered `action_type`.
    pub fn key_for(&self, action_type: &str) -> Option<&str> {
        self.entries.get(action_type).map(|entry| entry.key.as_str())
    }

    /// Registered action types in tree order.
    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered action types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no action types are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, P> fmt::Debug for DispatchTable<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(action_type, entry)| (action_type, &entry.key)),
            )
            .finish()
    }
}
