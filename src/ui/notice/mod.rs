//! Transient success/error notifications.

mod intent;
mod reducer;
mod state;
mod toast;

pub use intent::NoticeIntent;
pub use reducer::{NoticeReducer, MAX_NOTICES};
pub use state::{Notice, NoticeKind, NoticeState};
pub use toast::render_notices;
