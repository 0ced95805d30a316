use crate::employee::SearchQuery;
use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    EmployeeId,
    Name,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Being edited.
    pub draft: SearchQuery,
    /// Filtering the table.
    pub applied: SearchQuery,
    /// `None` when the search form does not have keyboard focus.
    pub focused: Option<SearchField>,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn is_editing(&self) -> bool {
        self.focused.is_some()
    }
}
