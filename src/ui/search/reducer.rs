use crate::employee::SearchQuery;
use crate::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchField, SearchState};

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Focus => state.focused = Some(SearchField::EmployeeId),
            SearchIntent::SwitchField => {
                state.focused = state.focused.map(|field| match field {
                    SearchField::EmployeeId => SearchField::Name,
                    SearchField::Name => SearchField::EmployeeId,
                });
            }
            SearchIntent::Input { ch } => {
                if let Some(value) = draft_field(&mut state) {
                    value.push(ch);
                }
            }
            SearchIntent::Backspace => {
                if let Some(value) = draft_field(&mut state) {
                    value.pop();
                }
            }
            SearchIntent::Submit => {
                tracing::debug!(
                    employee_id = %state.draft.employee_id,
                    name = %state.draft.name,
                    "Search applied"
                );
                state.applied = state.draft.clone();
                state.focused = None;
            }
            SearchIntent::Blur => state.focused = None,
            SearchIntent::Clear => {
                state.draft = SearchQuery::default();
                state.applied = SearchQuery::default();
            }
        }
        state
    }
}

fn draft_field(state: &mut SearchState) -> Option<&mut String> {
    match state.focused? {
        SearchField::EmployeeId => Some(&mut state.draft.employee_id),
        SearchField::Name => Some(&mut state.draft.name),
    }
}
