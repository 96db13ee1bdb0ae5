//! Configuration errors raised while composing duck trees.

use thiserror::Error;

/// A malformed duck leaf found while composing a reducer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DuckError {
    #[error("Given duck for '{key}' has no valid payload reducer")]
    MissingReducer { key: String },

    #[error(
        "Given action '{key}' does not have a proper action type assigned. \
         Did you miss running create_duck(\"ACTION_TYPE\", ...)?"
    )]
    MissingActionType { key: String },
}

impl DuckError {
    /// Flattened key of the offending leaf.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingReducer { key } | Self::MissingActionType { key } => key,
        }
    }
}

/// Errors raised when a duck tree is converted, flattened or composed.
///
/// These are developer mistakes in the tree definition. They are reported
/// at composition time and never while a reducer is running.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Given duck for '{key}' is not a function nor object literal")]
    NotFunctionNorObject { key: String },

    #[error("Duplicate key '{key}' in duck tree")]
    DuplicateKey { key: String },

    #[error("{} invalid duck(s): {}", .0.len(), join_messages(.0))]
    InvalidDucks(Vec<DuckError>),

    #[error("Action type '{action_type}' is used by both '{first}' and '{second}'")]
    DuplicateActionType {
        action_type: String,
        first: String,
        second: String,
    },
}

impl ConfigurationError {
    /// Every tree key named by this error.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::NotFunctionNorObject { key } | Self::DuplicateKey { key } => vec![key.as_str()],
            Self::InvalidDucks(errors) => errors.iter().map(DuckError::key).collect(),
            Self::DuplicateActionType { first, second, .. } => {
                vec![first.as_str(), second.as_str()]
            }
        }
    }
}

fn join_messages(errors: &[DuckError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
