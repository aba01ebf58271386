//! Transient notices shown over the active demo.

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::{ToastReducer, MAX_TOASTS};
pub use state::{Toast, ToastState};
