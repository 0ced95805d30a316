use crate::employee::{EmployeeForm, FormError, FormField};
use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormDialogState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormDialogState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::OpenCreate => visible(EmployeeForm::default()),
            FormIntent::OpenEdit { employee } => visible(EmployeeForm::from_employee(&employee)),
            FormIntent::Close => FormDialogState::Hidden,
            intent => match state {
                FormDialogState::Visible {
                    form,
                    focused,
                    errors,
                } => reduce_visible(form, focused, errors, intent),
                FormDialogState::Hidden => FormDialogState::Hidden,
            },
        }
    }
}

fn visible(form: EmployeeForm) -> FormDialogState {
    FormDialogState::Visible {
        form,
        focused: FormField::FirstName,
        errors: Vec::new(),
    }
}

fn reduce_visible(
    mut form: EmployeeForm,
    mut focused: FormField,
    mut errors: Vec<FormError>,
    intent: FormIntent,
) -> FormDialogState {
    match intent {
        FormIntent::Input { ch } => {
            form.push_char(focused, ch);
            errors.retain(|e| e.field() != focused);
        }
        FormIntent::Backspace => {
            form.pop_char(focused);
            errors.retain(|e| e.field() != focused);
        }
        FormIntent::FocusNext => focused = step(focused, 1),
        FormIntent::FocusPrev => focused = step(focused, -1),
        FormIntent::Rejected { errors: rejected } => {
            if let Some(first) = rejected.first() {
                focused = first.field();
            }
            errors = rejected;
        }
        FormIntent::OpenCreate | FormIntent::OpenEdit { .. } | FormIntent::Close => {}
    }
    FormDialogState::Visible {
        form,
        focused,
        errors,
    }
}

fn step(field: FormField, delta: isize) -> FormField {
    let fields = FormField::ALL;
    let len = fields.len() as isize;
    let current = fields.iter().position(|f| *f == field).unwrap_or(0) as isize;
    fields[(current + delta).rem_euclid(len) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::sample_employees;

    fn open() -> FormDialogState {
        FormReducer::reduce(FormDialogState::Hidden, FormIntent::OpenCreate)
    }

    fn typed(state: FormDialogState, text: &str) -> FormDialogState {
        text.chars()
            .fold(state, |s, ch| FormReducer::reduce(s, FormIntent::Input { ch }))
    }

    #[test]
    fn open_create_shows_blank_form() {
        let state = open();
        assert!(state.is_visible());
        assert_eq!(state.form(), Some(&EmployeeForm::default()));
    }

    #[test]
    fn open_edit_prefills_and_keeps_id() {
        let employee = sample_employees().remove(0);
        let state = FormReducer::reduce(
            FormDialogState::Hidden,
            FormIntent::OpenEdit {
                employee: employee.clone(),
            },
        );
        let form = state.form().unwrap();
        assert_eq!(form.id.as_deref(), Some("1234500001"));
        assert_eq!(form.first_name, "กาญจนา");
        assert_eq!(form.last_name, "สีทอง");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = typed(open(), "สม");
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        let state = typed(state, "ใจ");
        let form = state.form().unwrap();
        assert_eq!(form.first_name, "สม");
        assert_eq!(form.last_name, "ใจ");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let state = FormReducer::reduce(open(), FormIntent::FocusPrev);
        assert!(matches!(
            state,
            FormDialogState::Visible {
                focused: FormField::Address,
                ..
            }
        ));
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        assert!(matches!(
            state,
            FormDialogState::Visible {
                focused: FormField::FirstName,
                ..
            }
        ));
    }

    #[test]
    fn rejected_focuses_first_invalid_field() {
        let state = FormReducer::reduce(
            open(),
            FormIntent::Rejected {
                errors: vec![FormError::LastNameRequired, FormError::AddressRequired],
            },
        );
        assert_eq!(
            state.error_for(FormField::Address),
            Some(&FormError::AddressRequired)
        );
        assert!(matches!(
            state,
            FormDialogState::Visible {
                focused: FormField::LastName,
                ..
            }
        ));
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let state = FormReducer::reduce(
            open(),
            FormIntent::Rejected {
                errors: vec![FormError::FirstNameRequired, FormError::AddressRequired],
            },
        );
        let state = typed(state, "ก");
        assert_eq!(state.error_for(FormField::FirstName), None);
        assert!(state.error_for(FormField::Address).is_some());
    }

    #[test]
    fn close_resets_form() {
        let state = typed(open(), "สมชาย");
        let state = FormReducer::reduce(state, FormIntent::Close);
        assert_eq!(state, FormDialogState::Hidden);
        assert_eq!(open().form(), Some(&EmployeeForm::default()));
    }

    #[test]
    fn hidden_ignores_field_intents() {
        let state = FormReducer::reduce(FormDialogState::Hidden, FormIntent::Input { ch: 'a' });
        assert_eq!(state, FormDialogState::Hidden);
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        assert_eq!(state, FormDialogState::Hidden);
    }
}
