//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// Anything that is not a function of `(State, Intent)` (randomness,
/// user notifications) goes through `Effects`, which the host injects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Capabilities the reducer may call into. `()` for pure reducers.
    type Effects: ?Sized;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent, effects: &mut Self::Effects)
        -> Self::State;
}
