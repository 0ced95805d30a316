use crate::employee::{EmployeeForm, FormError, FormField};
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormDialogState {
    #[default]
    Hidden,
    Visible {
        form: EmployeeForm,
        focused: FormField,
        /// Errors from the last submit attempt, cleared per field on edit.
        errors: Vec<FormError>,
    },
}

impl UiState for FormDialogState {}

impl FormDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        match self {
            Self::Visible { form, .. } => Some(form),
            Self::Hidden => None,
        }
    }

    pub fn error_for(&self, field: FormField) -> Option<&FormError> {
        match self {
            Self::Visible { errors, .. } => errors.iter().find(|e| e.field() == field),
            Self::Hidden => None,
        }
    }
}
