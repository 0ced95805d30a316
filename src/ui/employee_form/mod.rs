//! Create/edit employee modal.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Hidden or visible with the form, focus and errors
//! - `intent.rs` - Typing, focus movement and rejected submits
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! Whether a save is in flight is tracked by `App`, not here: the dialog
//! can be closed and reopened while the previous save is still running.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::FormDialogState;
