//! Ducks: an action type, an action creator and a reducer in one value.
//!
//! A duck is the smallest unit of composition. Calling [`Duck::create`]
//! produces an [`Action`]; the attached reduce function describes how that
//! action changes state. Ducks are immutable and cheap to clone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared transition function `(state, payload) -> state`.
pub type ReduceFn<S, P> = Arc<dyn Fn(S, P) -> S + Send + Sync>;

/// Shared action creator `payload -> action`.
pub type ActionCreator<P> = Arc<dyn Fn(P) -> Action<P> + Send + Sync>;

/// An action submitted to a store.
///
/// The action type serializes under the field name `type`.
///
/// # Example
///
/// ```rust
/// use ducktree::Action;
///
/// let action = Action::new("ADD", 5);
/// let json = serde_json::to_string(&action).unwrap();
/// assert_eq!(json, r#"{"type":"ADD","payload":5}"#);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Action<P> {
    #[serde(rename = "type")]
    pub action_type: String,
    pub payload: P,
}

impl<P> Action<P> {
    /// Create an action from a type and a payload.
    pub fn new(action_type: impl Into<String>, payload: P) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }
}

/// An action creator tagged with its action type and reducer.
///
/// Built with [`create_duck`]. No validation happens at construction: an
/// empty action type is only rejected when the duck is composed into a
/// reducer, where the error can name the duck's position in the tree.
pub struct Duck<S, P> {
    action_type: String,
    reduce: ReduceFn<S, P>,
}

impl<S, P> Duck<S, P> {
    /// Create an action carrying this duck's type and the given payload.
    pub fn create(&self, payload: P) -> Action<P> {
        Action {
            action_type: self.action_type.clone(),
            payload,
        }
    }

    /// Action type stamped on every created action.
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Apply this duck's transition to `state` (pure).
    pub fn reduce(&self, state: S, payload: P) -> S {
        (self.reduce)(state, payload)
    }

    /// Shared handle to the transition function.
    pub fn reducer(&self) -> &ReduceFn<S, P> {
        &self.reduce
    }
}

impl<S, P> Clone for Duck<S, P> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            reduce: Arc::clone(&self.reduce),
        }
    }
}

impl<S, P> fmt::Debug for Duck<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}

/// Create a duck from an action type and a transition function.
///
/// # Example
///
/// ```rust
/// use ducktree::{create_duck, Action};
///
/// let add = create_duck("ADD", |state: i64, amount: i64| state + amount);
///
/// assert_eq!(add.create(5), Action::new("ADD", 5));
/// assert_eq!(add.action_type(), "ADD");
/// assert_eq!(add.reduce(1, 5), 6);
/// ```
pub fn create_duck<S, P, F>(action_type: impl Into<String>, reduce: F) -> Duck<S, P>
where
    F: Fn(S, P) -> S + Send + Sync + 'static,
{
    Duck {
        action_type: action_type.into(),
        reduce: Arc::new(reduce),
    }
}
