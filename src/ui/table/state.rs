use std::ops::Range;

use crate::mvi::UiState;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Selection over the visible (filtered) rows.
///
/// The current page is derived from the selected row, so moving the
/// selection past a page boundary turns the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub page_size: usize,
    /// Absolute index into the visible rows.
    pub selected: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for TableState {}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            selected: 0,
        }
    }

    /// Zero-based page of the selected row.
    pub fn page(&self) -> usize {
        self.selected / self.page_size
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Row indices shown on the current page.
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = (self.page() * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Selected index, if there is any row at all.
    pub fn selected_index(&self, total: usize) -> Option<usize> {
        if total == 0 {
            None
        } else {
            Some(self.selected.min(total - 1))
        }
    }
}
