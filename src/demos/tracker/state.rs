use std::fmt;

use serde::Serialize;

use crate::demos::tracker::duration::format_hours_minutes;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub name: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerState {
    pub name_input: String,
    pub duration_input: String,
    pub activities: Vec<Activity>,
}

impl UiState for TrackerState {}

impl TrackerState {
    pub fn summary(&self) -> TrackerSummary {
        TrackerSummary::of(self.activities.iter().map(|activity| activity.minutes))
    }
}

/// Count and total of a list of durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TrackerSummary {
    pub count: usize,
    pub total_minutes: u32,
}

impl TrackerSummary {
    pub fn of(minutes: impl IntoIterator<Item = u32>) -> Self {
        minutes.into_iter().fold(Self::default(), |acc, minutes| Self {
            count: acc.count + 1,
            total_minutes: acc.total_minutes.saturating_add(minutes),
        })
    }

    pub fn hours(&self) -> u32 {
        self.total_minutes / 60
    }

    pub fn minutes(&self) -> u32 {
        self.total_minutes % 60
    }
}

impl fmt::Display for TrackerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} activities, {} ({} min)",
            self.count,
            format_hours_minutes(self.total_minutes),
            self.total_minutes
        )
    }
}
