//! Employee table: row selection and fixed-size pagination.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Selected row and page size
//! - `intent.rs` - Navigation keys
//! - `reducer.rs` - Selection movement, clamped to the row count
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{TableState, DEFAULT_PAGE_SIZE};
pub use view::{render_table, ACTION_HINT};
