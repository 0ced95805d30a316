use crate::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButton {
    #[default]
    Delete,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        id: String,
        name: String,
        selected: ConfirmButton,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Id to delete if the delete button is the current choice.
    pub fn confirmed_id(&self) -> Option<&str> {
        match self {
            Self::Visible {
                id,
                selected: ConfirmButton::Delete,
                ..
            } => Some(id),
            _ => None,
        }
    }
}
