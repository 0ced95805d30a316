use crate::employee::Employee;
use crate::mvi::UiState;

/// The employee slice.
///
/// `loading` reflects the fetch operation only. Create, update and delete
/// have no store-level progress flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeState {
    /// Records in insertion order.
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for EmployeeState {}
