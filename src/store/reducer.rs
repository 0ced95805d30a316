//! Reducer for the employee store.

use crate::mvi::Reducer;

use super::intent::{EmployeeIntent, Settlement};
use super::state::EmployeeState;

/// Stored in `error` when a fetch is rejected without a message.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch employees";

/// Reducer for employee state transitions.
///
/// Only fetch settlements touch `loading` and `error`. Pending and rejected
/// settlements of create, update and delete leave the state unchanged.
pub struct EmployeeReducer;

impl Reducer for EmployeeReducer {
    type State = EmployeeState;
    type Intent = EmployeeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EmployeeIntent::Fetch(Settlement::Pending) => {
                state.loading = true;
                state.error = None;
            }
            EmployeeIntent::Fetch(Settlement::Fulfilled(employees)) => {
                state.loading = false;
                state.employees = employees;
            }
            EmployeeIntent::Fetch(Settlement::Rejected(message)) => {
                state.loading = false;
                state.error = Some(
                    message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string()),
                );
            }
            EmployeeIntent::Delete(Settlement::Fulfilled(id)) => {
                state.employees.retain(|e| e.id != id);
            }
            EmployeeIntent::Create(Settlement::Fulfilled(employee)) => {
                state.employees.push(employee);
            }
            EmployeeIntent::Update(Settlement::Fulfilled(employee)) => {
                if let Some(slot) = state.employees.iter_mut().find(|e| e.id == employee.id) {
                    *slot = employee;
                }
            }
            EmployeeIntent::Delete(_) | EmployeeIntent::Create(_) | EmployeeIntent::Update(_) => {}
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{sample_employees, Employee};

    fn loaded() -> EmployeeState {
        EmployeeState {
            employees: sample_employees(),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn fetch_pending_sets_loading_and_clears_error() {
        let state = EmployeeState {
            error: Some("old".into()),
            ..EmployeeState::default()
        };
        let new = EmployeeReducer::reduce(state, EmployeeIntent::Fetch(Settlement::Pending));
        assert!(new.loading);
        assert_eq!(new.error, None);
    }

    #[test]
    fn fetch_fulfilled_replaces_list() {
        let state = EmployeeState {
            employees: vec![Employee {
                id: "stale".into(),
                first_name: "เก่า".into(),
                address: "ไม่มี".into(),
            }],
            loading: true,
            error: None,
        };
        let new = EmployeeReducer::reduce(
            state,
            EmployeeIntent::Fetch(Settlement::Fulfilled(sample_employees())),
        );
        assert!(!new.loading);
        assert_eq!(new.employees, sample_employees());
    }

    #[test]
    fn fetch_rejected_keeps_message() {
        let state = EmployeeState {
            loading: true,
            ..EmployeeState::default()
        };
        let new = EmployeeReducer::reduce(
            state,
            EmployeeIntent::Fetch(Settlement::Rejected(Some("network down".into()))),
        );
        assert!(!new.loading);
        assert_eq!(new.error.as_deref(), Some("network down"));
    }

    #[test]
    fn fetch_rejected_without_message_uses_default() {
        for message in [None, Some(String::new())] {
            let new = EmployeeReducer::reduce(
                EmployeeState::default(),
                EmployeeIntent::Fetch(Settlement::Rejected(message)),
            );
            assert_eq!(new.error.as_deref(), Some(DEFAULT_FETCH_ERROR));
        }
    }

    #[test]
    fn create_appends_at_end() {
        let created = Employee {
            id: "1700000000000".into(),
            first_name: "ทดสอบ".into(),
            address: "ที่อยู่ทดสอบ".into(),
        };
        let new = EmployeeReducer::reduce(
            loaded(),
            EmployeeIntent::Create(Settlement::Fulfilled(created.clone())),
        );
        assert_eq!(new.employees.len(), 5);
        assert_eq!(new.employees.last(), Some(&created));
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let new = EmployeeReducer::reduce(
            loaded(),
            EmployeeIntent::Delete(Settlement::Fulfilled("1234500002".into())),
        );
        let mut expected = sample_employees();
        expected.remove(1);
        assert_eq!(new.employees, expected);
    }

    #[test]
    fn delete_of_absent_id_is_noop() {
        let new = EmployeeReducer::reduce(
            loaded(),
            EmployeeIntent::Delete(Settlement::Fulfilled("missing".into())),
        );
        assert_eq!(new, loaded());
    }

    #[test]
    fn update_replaces_in_place() {
        let mut changed = sample_employees()[2].clone();
        changed.address = "ย้ายไปเชียงใหม่ 50000".into();
        let new = EmployeeReducer::reduce(
            loaded(),
            EmployeeIntent::Update(Settlement::Fulfilled(changed.clone())),
        );
        assert_eq!(new.employees[2], changed);
        assert_eq!(new.employees[..2], sample_employees()[..2]);
        assert_eq!(new.employees[3], sample_employees()[3]);
    }

    #[test]
    fn update_of_absent_id_is_noop() {
        let ghost = Employee {
            id: "ghost".into(),
            first_name: "ไม่มีตัวตน".into(),
            address: "ไม่มีที่อยู่".into(),
        };
        let new = EmployeeReducer::reduce(loaded(), EmployeeIntent::Update(Settlement::Fulfilled(ghost)));
        assert_eq!(new, loaded());
    }

    #[test]
    fn mutation_pending_and_rejected_do_not_touch_flags() {
        let state = EmployeeState {
            loading: true,
            error: Some("kept".into()),
            ..loaded()
        };
        let intents = vec![
            EmployeeIntent::Create(Settlement::Pending),
            EmployeeIntent::Create(Settlement::Rejected(None)),
            EmployeeIntent::Update(Settlement::Pending),
            EmployeeIntent::Update(Settlement::Rejected(Some("x".into()))),
            EmployeeIntent::Delete(Settlement::Pending),
            EmployeeIntent::Delete(Settlement::Rejected(None)),
        ];
        for intent in intents {
            let new = EmployeeReducer::reduce(state.clone(), intent);
            assert_eq!(new, state);
        }
    }
}
