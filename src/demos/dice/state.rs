use crate::ui::mvi::UiState;
use serde::Serialize;

/// Default maximum face value for a freshly created session.
pub const DEFAULT_FACE_MAXIMUM: &str = "6";

/// Everything the dice screen renders.
///
/// `max_values` holds raw text as typed; it is only parsed when a roll is
/// requested. After any accepted mutation
/// `max_values.len() == current_results.len() == dice_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceSessionState {
    pub dice_count: u8,
    /// Shared maximum used when every die has the same maximum.
    pub shared_max: String,
    pub max_values: Vec<String>,
    pub current_results: Vec<u8>,
    /// Results of the roll before the current one. Empty until the first
    /// accepted count change or roll.
    pub previous_results: Vec<u8>,
    pub same_value_mode: bool,
}

impl Default for DiceSessionState {
    fn default() -> Self {
        Self {
            dice_count: 1,
            shared_max: DEFAULT_FACE_MAXIMUM.to_string(),
            max_values: vec![DEFAULT_FACE_MAXIMUM.to_string()],
            current_results: vec![1],
            previous_results: Vec::new(),
            same_value_mode: true,
        }
    }
}

impl UiState for DiceSessionState {}

impl DiceSessionState {
    /// Fresh session with `count` dice sharing `shared_max`. Nothing has been
    /// rolled yet, so `previous_results` is empty. `count` is clamped to 1..=5.
    pub fn starting_with(count: u8, shared_max: &str) -> Self {
        let len = usize::from(count.clamp(1, 5));
        Self {
            dice_count: len as u8,
            shared_max: shared_max.to_string(),
            max_values: vec![shared_max.to_string(); len],
            current_results: vec![1; len],
            ..Self::default()
        }
    }

    /// Resize to `count` dice: every maximum becomes the shared maximum and
    /// both result rows reset to ones.
    pub(super) fn resized(self, count: u8) -> Self {
        let len = usize::from(count);
        Self {
            dice_count: count,
            max_values: vec![self.shared_max.clone(); len],
            current_results: vec![1; len],
            previous_results: vec![1; len],
            ..self
        }
    }
}
