//! Three-screen form: screen 1 collects one value, screen 2 shows it and
//! collects a second, screen 3 shows both.

mod intent;
mod reducer;
mod state;

pub use intent::WizardIntent;
pub use reducer::WizardReducer;
pub use state::{WizardScreen, WizardState};
