//! Activity tracker: a running list of named durations and their total.

mod duration;
mod intent;
mod reducer;
mod state;

pub use duration::{format_hours_minutes, parse_duration};
pub use intent::TrackerIntent;
pub use reducer::TrackerReducer;
pub use state::{Activity, TrackerState, TrackerSummary};
