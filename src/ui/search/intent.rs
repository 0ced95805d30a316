use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Give the form keyboard focus on the employee id field.
    Focus,
    /// Toggle between the id and name fields.
    SwitchField,
    Input { ch: char },
    Backspace,
    /// Apply the draft and leave the form.
    Submit,
    /// Leave the form without applying.
    Blur,
    /// Empty both draft and applied query.
    Clear,
}

impl Intent for SearchIntent {}
