//! Contract between the store and whatever backs employee data.

use async_trait::async_trait;
use thiserror::Error;

use super::model::{Employee, NewEmployee};

/// Failure reported by an [`EmployeeService`].
///
/// The store does not distinguish failure kinds; only the message reaches
/// the state, and only for fetches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Failed { message: String },
    /// Failure without a usable message. The store substitutes its own default.
    #[error("service failed without a message")]
    Unspecified,
}

impl ServiceError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Message carried by the failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Four CRUD operations over employee records.
///
/// The mock implementation simulates latency and always succeeds. A real
/// backend client implements the same signatures and settles each call with
/// `Ok` or `Err` to be a drop-in replacement.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Returns the full employee list.
    async fn list(&self) -> Result<Vec<Employee>, ServiceError>;

    /// Creates a record and returns it with its assigned id.
    async fn create(&self, employee: NewEmployee) -> Result<Employee, ServiceError>;

    /// Replaces a record and returns the stored version.
    async fn update(&self, employee: Employee) -> Result<Employee, ServiceError>;

    /// Deletes the record with `id`.
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
