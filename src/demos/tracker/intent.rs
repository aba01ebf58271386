use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerIntent {
    EditName { text: String },
    EditDuration { text: String },
    /// Commit the two input fields as a new activity.
    Add,
    /// Drop every recorded activity.
    Clear,
}

impl Intent for TrackerIntent {}
