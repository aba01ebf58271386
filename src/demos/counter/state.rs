use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickCounterState {
    clicks: u64,
}

impl UiState for ClickCounterState {}

impl ClickCounterState {
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub(super) fn incremented(self) -> Self {
        Self {
            clicks: self.clicks.saturating_add(1),
        }
    }
}
