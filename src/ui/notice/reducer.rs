use crate::mvi::Reducer;

use super::intent::NoticeIntent;
use super::state::{Notice, NoticeState};

/// Older notices are dropped beyond this many.
pub const MAX_NOTICES: usize = 3;

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::Push {
                kind,
                text,
                expires_at,
            } => {
                state.notices.push(Notice {
                    kind,
                    text,
                    expires_at,
                });
                let overflow = state.notices.len().saturating_sub(MAX_NOTICES);
                state.notices.drain(..overflow);
            }
            NoticeIntent::Expire { now } => {
                state.notices.retain(|notice| notice.expires_at > now);
            }
        }
        state
    }
}
