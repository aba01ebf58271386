use std::ops::RangeInclusive;

use serde::Serialize;

use crate::demos::dice::intent::DiceIntent;
use crate::demos::dice::state::DiceSessionState;
use crate::demos::input::{parse_in_range, InputError};
use crate::demos::notice::{Notice, Notifier};
use crate::ui::mvi::Reducer;

pub const DICE_COUNT_RANGE: RangeInclusive<i32> = 1..=5;
pub const FACE_RANGE: RangeInclusive<i32> = 1..=6;

/// What the dice reducer needs from its host besides the state.
pub trait DiceEffects: Notifier {
    /// Uniform sample in `1..=faces`.
    fn roll_die(&mut self, faces: u8) -> u8;
}

/// Fresh results of one accepted roll, one entry per die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    pub results: Vec<u8>,
}

impl RollOutcome {
    fn sample(maxima: &[u8], effects: &mut dyn DiceEffects) -> Self {
        Self {
            results: maxima.iter().map(|&faces| effects.roll_die(faces)).collect(),
        }
    }
}

/// Parse every maximum; the first bad entry rejects the whole set.
pub fn validated_maxima(max_values: &[String]) -> Result<Vec<u8>, InputError> {
    max_values
        .iter()
        .map(|raw| parse_in_range(raw, FACE_RANGE).map(|value| value as u8))
        .collect()
}

pub struct DiceReducer;

impl Reducer for DiceReducer {
    type State = DiceSessionState;
    type Intent = DiceIntent;
    type Effects = dyn DiceEffects;

    fn reduce(state: Self::State, intent: Self::Intent, effects: &mut Self::Effects) -> Self::State {
        match intent {
            DiceIntent::SetDiceCount { input } => match parse_in_range(&input, DICE_COUNT_RANGE) {
                Ok(count) => state.resized(count as u8),
                Err(err) => {
                    tracing::debug!(%err, "dice count rejected");
                    effects.notify(Notice::DiceCount.message());
                    state
                }
            },
            DiceIntent::SetSharedMaximum { input } => {
                let len = usize::from(state.dice_count);
                DiceSessionState {
                    max_values: vec![input.clone(); len],
                    shared_max: input,
                    ..state
                }
            }
            DiceIntent::SetPerDieMaximum { index, input } => {
                let mut state = state;
                match state.max_values.get_mut(index) {
                    Some(slot) => *slot = input,
                    None => tracing::warn!(
                        index,
                        dice_count = state.dice_count,
                        "per-die maximum for a die that does not exist"
                    ),
                }
                state
            }
            // Switching modes leaves max_values as they were.
            DiceIntent::ToggleSameValueMode { enabled } => DiceSessionState {
                same_value_mode: enabled,
                ..state
            },
            DiceIntent::Roll => match validated_maxima(&state.max_values) {
                Ok(maxima) => {
                    let outcome = RollOutcome::sample(&maxima, effects);
                    tracing::debug!(results = ?outcome.results, "dice rolled");
                    DiceSessionState {
                        previous_results: state.current_results,
                        current_results: outcome.results,
                        ..state
                    }
                }
                Err(err) => {
                    tracing::debug!(%err, "roll rejected");
                    effects.notify(Notice::FaceMaximum.message());
                    state
                }
            },
        }
    }
}
