//! Dice simulator: one to five dice, each with its own maximum face value,
//! and a one-deep history of the previous roll.

mod intent;
mod reducer;
mod session;
mod state;

pub use intent::DiceIntent;
pub use reducer::{
    validated_maxima, DiceEffects, DiceReducer, RollOutcome, DICE_COUNT_RANGE, FACE_RANGE,
};
pub use session::{DiceSession, SessionEffects};
pub use state::{DiceSessionState, DEFAULT_FACE_MAXIMUM};
