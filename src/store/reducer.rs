//! Reducer trait for the unidirectional data flow.

use super::action::Action;
use super::effect::Effect;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen. It receives
/// exclusive mutable access to the state for the duration of one call and
/// returns a description of any follow-up work; it must not perform side
/// effects itself.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action, mutate the state, and describe follow-up work.
    fn reduce(state: &mut Self::State, action: Self::Action) -> Effect<Self::Action>;
}
