use rand::rngs::ThreadRng;
use rand::Rng;

use crate::demos::dice::intent::DiceIntent;
use crate::demos::dice::reducer::{validated_maxima, DiceEffects, DiceReducer, RollOutcome};
use crate::demos::dice::state::DiceSessionState;
use crate::demos::notice::Notifier;
use crate::ui::mvi::Reducer;

/// Notifier and random source handed to the dice reducer.
pub struct SessionEffects<N, R> {
    notifier: N,
    rng: R,
}

impl<N: Notifier, R> Notifier for SessionEffects<N, R> {
    fn notify(&mut self, message: &str) {
        self.notifier.notify(message);
    }
}

impl<N: Notifier, R: Rng> DiceEffects for SessionEffects<N, R> {
    fn roll_die(&mut self, faces: u8) -> u8 {
        self.rng.random_range(1..=faces)
    }
}

/// A dice session with its notification channel injected at construction.
pub struct DiceSession<N, R = ThreadRng> {
    state: DiceSessionState,
    effects: SessionEffects<N, R>,
}

impl<N: Notifier + 'static> DiceSession<N, ThreadRng> {
    pub fn new(notifier: N) -> Self {
        Self::with_rng(notifier, rand::rng())
    }
}

impl<N: Notifier + 'static, R: Rng + 'static> DiceSession<N, R> {
    pub fn with_rng(notifier: N, rng: R) -> Self {
        Self {
            state: DiceSessionState::default(),
            effects: SessionEffects { notifier, rng },
        }
    }

    /// Replace the starting state without going through the intents, so no
    /// notice is raised and no history is recorded.
    pub fn with_state(self, state: DiceSessionState) -> Self {
        Self { state, ..self }
    }

    pub fn state(&self) -> &DiceSessionState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: DiceIntent) {
        self.state = DiceReducer::reduce(std::mem::take(&mut self.state), intent, &mut self.effects);
    }

    pub fn set_dice_count(&mut self, input: &str) {
        self.dispatch(DiceIntent::SetDiceCount {
            input: input.to_string(),
        });
    }

    pub fn set_shared_maximum(&mut self, input: &str) {
        self.dispatch(DiceIntent::SetSharedMaximum {
            input: input.to_string(),
        });
    }

    pub fn set_per_die_maximum(&mut self, index: usize, input: &str) {
        self.dispatch(DiceIntent::SetPerDieMaximum {
            index,
            input: input.to_string(),
        });
    }

    pub fn toggle_same_value_mode(&mut self, enabled: bool) {
        self.dispatch(DiceIntent::ToggleSameValueMode { enabled });
    }

    /// Request a roll. Returns the fresh results when the roll was accepted;
    /// a rejected roll has already been reported through the notifier.
    pub fn roll(&mut self) -> Option<RollOutcome> {
        let accepted = validated_maxima(&self.state.max_values).is_ok();
        self.dispatch(DiceIntent::Roll);
        accepted.then(|| RollOutcome {
            results: self.state.current_results.clone(),
        })
    }
}
