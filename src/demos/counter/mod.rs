//! Click counter. The count is only readable from outside; the single
//! intent bumps it by one.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::ClickCounterState;
