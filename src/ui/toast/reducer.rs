use crate::ui::mvi::Reducer;
use crate::ui::toast::intent::ToastIntent;
use crate::ui::toast::state::{Toast, ToastState};

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 3;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;
    type Effects = ();

    fn reduce(state: Self::State, intent: Self::Intent, _: &mut ()) -> Self::State {
        let mut toasts = state.toasts;
        match intent {
            ToastIntent::Push { message, ticks } => {
                // Repeating the newest message (e.g. every keystroke of a bad
                // count) refreshes it instead of stacking copies.
                match toasts.back_mut() {
                    Some(last) if last.message == message => last.remaining_ticks = ticks,
                    _ => {
                        toasts.push_back(Toast {
                            message,
                            remaining_ticks: ticks,
                        });
                        while toasts.len() > MAX_TOASTS {
                            toasts.pop_front();
                        }
                    }
                }
            }
            ToastIntent::Tick => {
                for toast in toasts.iter_mut() {
                    toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
                }
                toasts.retain(|toast| toast.remaining_ticks > 0);
            }
            ToastIntent::DismissAll => toasts.clear(),
        }
        ToastState { toasts }
    }
}
