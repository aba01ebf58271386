use crate::demos::notice::{Notice, Notifier};
use crate::demos::tracker::duration::parse_duration;
use crate::demos::tracker::intent::TrackerIntent;
use crate::demos::tracker::state::{Activity, TrackerState};
use crate::ui::mvi::Reducer;

pub struct TrackerReducer;

impl Reducer for TrackerReducer {
    type State = TrackerState;
    type Intent = TrackerIntent;
    type Effects = dyn Notifier;

    fn reduce(state: Self::State, intent: Self::Intent, effects: &mut Self::Effects) -> Self::State {
        match intent {
            TrackerIntent::EditName { text } => TrackerState {
                name_input: text,
                ..state
            },
            TrackerIntent::EditDuration { text } => TrackerState {
                duration_input: text,
                ..state
            },
            TrackerIntent::Add => {
                let name = state.name_input.trim();
                match parse_duration(state.duration_input.trim()) {
                    Some(minutes) if !name.is_empty() => {
                        let activity = Activity {
                            name: name.to_string(),
                            minutes,
                        };
                        tracing::debug!(name = %activity.name, minutes, "activity added");
                        let mut activities = state.activities;
                        activities.push(activity);
                        TrackerState {
                            name_input: String::new(),
                            duration_input: String::new(),
                            activities,
                        }
                    }
                    _ => {
                        effects.notify(Notice::ActivityInput.message());
                        state
                    }
                }
            }
            TrackerIntent::Clear => TrackerState {
                activities: Vec::new(),
                ..state
            },
        }
    }
}
