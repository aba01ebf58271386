use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastIntent {
    /// Show `message` for `ticks` ticks.
    Push { message: String, ticks: u32 },
    /// One event loop tick elapsed.
    Tick,
    /// User dismissed every visible toast.
    DismissAll,
}

impl Intent for ToastIntent {}
