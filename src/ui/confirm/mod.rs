//! Delete confirmation dialog.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::{ConfirmButton, ConfirmDialogState};
