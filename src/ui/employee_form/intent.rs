use crate::employee::{Employee, FormError};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open an empty form in create mode.
    OpenCreate,
    /// Open pre-filled with `employee` in edit mode.
    OpenEdit { employee: Employee },
    Input { ch: char },
    Backspace,
    FocusNext,
    FocusPrev,
    /// Submit was attempted with invalid fields.
    Rejected { errors: Vec<FormError> },
    /// The operation succeeded, or the user cancelled.
    Close,
}

impl Intent for FormIntent {}
