use crate::mvi::Reducer;

use super::intent::TableIntent;
use super::state::TableState;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = match intent {
            TableIntent::MoveUp { total } => {
                clamp(state.selected, total).saturating_sub(1)
            }
            TableIntent::MoveDown { total } => {
                let next = clamp(state.selected, total) + 1;
                clamp(next, total)
            }
            TableIntent::NextPage { total } => {
                if state.page() + 1 >= state.page_count(total) {
                    clamp(state.selected, total)
                } else {
                    (state.page() + 1) * state.page_size
                }
            }
            TableIntent::PrevPage { total } => {
                let page = state.page().saturating_sub(1);
                clamp(page * state.page_size, total)
            }
            TableIntent::Clamp { total } => clamp(state.selected, total),
            TableIntent::Reset => 0,
        };
        TableState { selected, ..state }
    }
}

fn clamp(index: usize, total: usize) -> usize {
    index.min(total.saturating_sub(1))
}
