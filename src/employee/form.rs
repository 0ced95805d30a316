//! Editable employee form and its field-length validation.
//!
//! The form edits first name, last name and address. The store keeps a
//! single name field, so on submit the two name parts are joined with a
//! space, and on edit the stored name is split at the first whitespace.

use thiserror::Error;

use super::model::{Employee, NewEmployee};

/// Longest address the form accepts while typing.
pub const ADDRESS_MAX_CHARS: usize = 200;

const NAME_MIN_CHARS: usize = 2;
const ADDRESS_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Address,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::FirstName, FormField::LastName, FormField::Address];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "ชื่อ",
            FormField::LastName => "นามสกุล",
            FormField::Address => "ที่อยู่",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "กรอกชื่อ",
            FormField::LastName => "กรอกนามสกุล",
            FormField::Address => "กรอกที่อยู่",
        }
    }

    fn max_chars(self) -> Option<usize> {
        match self {
            FormField::Address => Some(ADDRESS_MAX_CHARS),
            _ => None,
        }
    }
}

/// A single field validation failure.
///
/// Display output is the message shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("กรุณากรอกชื่อ")]
    FirstNameRequired,
    #[error("ชื่อต้องมีความยาวอย่างน้อย 2 ตัวอักษร")]
    FirstNameTooShort,
    #[error("กรุณากรอกนามสกุล")]
    LastNameRequired,
    #[error("นามสกุลต้องมีความยาวอย่างน้อย 2 ตัวอักษร")]
    LastNameTooShort,
    #[error("กรุณากรอกที่อยู่")]
    AddressRequired,
    #[error("ที่อยู่ต้องมีความยาวอย่างน้อย 10 ตัวอักษร")]
    AddressTooShort,
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::FirstNameRequired | FormError::FirstNameTooShort => FormField::FirstName,
            FormError::LastNameRequired | FormError::LastNameTooShort => FormField::LastName,
            FormError::AddressRequired | FormError::AddressTooShort => FormField::Address,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Present in edit mode; shown read-only.
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl EmployeeForm {
    /// Pre-filled form for editing `employee`.
    pub fn from_employee(employee: &Employee) -> Self {
        let name = employee.first_name.trim();
        let (first_name, last_name) = match name.split_once(char::is_whitespace) {
            Some((first, last)) => (first.to_string(), last.trim_start().to_string()),
            None => (name.to_string(), String::new()),
        };
        Self {
            id: Some(employee.id.clone()),
            first_name,
            last_name,
            address: employee.address.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Address => &self.address,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Address => &mut self.address,
        }
    }

    /// Append a typed character. Ignored once the field is at its maximum.
    pub fn push_char(&mut self, field: FormField, ch: char) {
        let max = field.max_chars();
        let value = self.value_mut(field);
        if max.is_some_and(|max| value.chars().count() >= max) {
            return;
        }
        value.push(ch);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.value_mut(field).pop();
    }

    /// All validation failures, in field order.
    pub fn errors(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        check(
            &self.first_name,
            NAME_MIN_CHARS,
            FormError::FirstNameRequired,
            FormError::FirstNameTooShort,
            &mut errors,
        );
        check(
            &self.last_name,
            NAME_MIN_CHARS,
            FormError::LastNameRequired,
            FormError::LastNameTooShort,
            &mut errors,
        );
        check(
            &self.address,
            ADDRESS_MIN_CHARS,
            FormError::AddressRequired,
            FormError::AddressTooShort,
            &mut errors,
        );
        errors
    }

    /// The full name stored in [`Employee::first_name`].
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if last.is_empty() {
            first.to_string()
        } else {
            format!("{} {}", first, last)
        }
    }

    /// Validated create payload.
    pub fn to_new_employee(&self) -> Result<NewEmployee, Vec<FormError>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewEmployee {
            first_name: self.full_name(),
            address: self.address.trim().to_string(),
        })
    }

    /// Validated update payload. Without an id this is a create form and
    /// yields `None` inside `Ok`.
    pub fn to_employee(&self) -> Result<Option<Employee>, Vec<FormError>> {
        let new = self.to_new_employee()?;
        Ok(self.id.clone().map(|id| new.with_id(id)))
    }
}

fn check(
    value: &str,
    min_chars: usize,
    required: FormError,
    too_short: FormError,
    errors: &mut Vec<FormError>,
) {
    let len = value.trim().chars().count();
    if len == 0 {
        errors.push(required);
    } else if len < min_chars {
        errors.push(too_short);
    }
}
