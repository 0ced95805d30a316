//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses in a form or dialog)
/// - Operation settlements (pending, fulfilled, rejected)
/// - Timers
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
