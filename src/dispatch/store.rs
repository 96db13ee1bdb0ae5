//! The store seam bound actions dispatch into.

use crate::core::Action;

/// An external store that accepts actions.
///
/// The store owns state and any ordering or concurrency semantics of
/// dispatch. Returning `Ok(None)` means dispatch produced no value, in which
/// case bound actions hand back the action they created.
pub trait Store<P> {
    /// Value a dispatch may produce, e.g. a transformed action or a handle.
    type Output;

    /// Error raised by dispatch. Passed through bound actions unmodified.
    type Error;

    fn dispatch(&self, action: &Action<P>) -> Result<Option<Self::Output>, Self::Error>;
}

/// Outcome of calling a bound action.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatched<P, O> {
    /// The store returned a value from dispatch.
    Returned(O),

    /// The store returned nothing; this is the action that was dispatched.
    Action(Action<P>),
}

impl<P, O> Dispatched<P, O> {
    /// The dispatched action, if the store returned nothing.
    pub fn into_action(self) -> Option<Action<P>> {
        match self {
            Self::Action(action) => Some(action),
            Self::Returned(_) => None,
        }
    }

    /// The store's return value, if any.
    pub fn returned(self) -> Option<O> {
        match self {
            Self::Returned(output) => Some(output),
            Self::Action(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_action_only_for_action_outcome() {
        let outcome: Dispatched<i32, String> = Dispatched::Action(Action::new("ADD", 1));
        assert_eq!(outcome.into_action(), Some(Action::new("ADD", 1)));

        let outcome: Dispatched<i32, String> = Dispatched::Returned("ok".to_string());
        assert_eq!(outcome.into_action(), None);
    }

    #[test]
    fn returned_only_for_store_value() {
        let outcome: Dispatched<i32, String> = Dispatched::Returned("ok".to_string());
        assert_eq!(outcome.returned(), Some("ok".to_string()));

        let outcome: Dispatched<i32, String> = Dispatched::Action(Action::new("ADD", 1));
        assert_eq!(outcome.returned(), None);
    }
}
