use crate::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::{ConfirmButton, ConfirmDialogState};

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { id, name } => ConfirmDialogState::Visible {
                id,
                name,
                selected: ConfirmButton::default(),
            },
            ConfirmIntent::ToggleButton => match state {
                ConfirmDialogState::Visible { id, name, selected } => {
                    let selected = match selected {
                        ConfirmButton::Delete => ConfirmButton::Cancel,
                        ConfirmButton::Cancel => ConfirmButton::Delete,
                    };
                    ConfirmDialogState::Visible { id, name, selected }
                }
                other => other,
            },
            ConfirmIntent::Close => ConfirmDialogState::Hidden,
        }
    }
}
