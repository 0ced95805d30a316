//! Search form above the table.
//!
//! The draft query is edited in place and copied to `applied` on submit;
//! the table only ever filters by `applied`.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use panel::render_search_panel;
pub use reducer::SearchReducer;
pub use state::{SearchField, SearchState};
