use std::time::Instant;

use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeState {
    pub notices: Vec<Notice>,
}

impl UiState for NoticeState {}

impl NoticeState {
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }
}
