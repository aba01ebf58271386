//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every demo screen is driven by unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing everything a screen renders
//! - **Intent**: a discrete user action (keystroke, toggle, button press)
//! - **Reducer**: the single place state changes, `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
