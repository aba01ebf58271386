//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Field edits (raw text as typed)
/// - Button presses and toggles
/// - Navigation between screens
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
