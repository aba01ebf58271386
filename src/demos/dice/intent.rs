use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceIntent {
    /// Dice count field changed; accepted only for 1..=5.
    SetDiceCount { input: String },
    /// Shared maximum field changed. Copied to every die without validation.
    SetSharedMaximum { input: String },
    /// One die's maximum field changed.
    SetPerDieMaximum { index: usize, input: String },
    ToggleSameValueMode { enabled: bool },
    Roll,
}

impl Intent for DiceIntent {}
