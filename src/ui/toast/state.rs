use crate::ui::mvi::UiState;
use std::collections::VecDeque;

/// One notice on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    /// Ticks left before the toast disappears.
    pub remaining_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub toasts: VecDeque<Toast>,
}

impl UiState for ToastState {}

impl ToastState {
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.toasts.iter().map(|toast| toast.message.as_str())
    }
}
