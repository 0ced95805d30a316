use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Open { id: String, name: String },
    /// Switch between the delete and cancel buttons.
    ToggleButton,
    Close,
}

impl Intent for ConfirmIntent {}
