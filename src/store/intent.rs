//! Intents for the employee store.

use crate::employee::Employee;
use crate::mvi::Intent;

/// Three-state outcome of an asynchronous operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<T> {
    /// The operation has been dispatched and is awaiting the service.
    Pending,
    /// The service resolved with a payload.
    Fulfilled(T),
    /// The service failed. The message may be absent.
    Rejected(Option<String>),
}

/// One settlement of one of the four store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeIntent {
    Fetch(Settlement<Vec<Employee>>),
    /// Fulfilled payload is the deleted id.
    Delete(Settlement<String>),
    /// Fulfilled payload is the created record, id included.
    Create(Settlement<Employee>),
    Update(Settlement<Employee>),
}

impl Intent for EmployeeIntent {}
