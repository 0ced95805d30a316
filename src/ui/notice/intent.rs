use std::time::Instant;

use super::state::NoticeKind;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NoticeIntent {
    Push {
        kind: NoticeKind,
        text: String,
        expires_at: Instant,
    },
    /// Drop every notice that has expired by `now`.
    Expire { now: Instant },
}

impl Intent for NoticeIntent {}
