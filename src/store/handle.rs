//! Asynchronous store operations.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::employee::{Employee, EmployeeService, NewEmployee, ServiceError};
use crate::mvi::Reducer;

use super::intent::{EmployeeIntent, Settlement};
use super::reducer::{EmployeeReducer, DEFAULT_FETCH_ERROR};
use super::state::EmployeeState;

/// The four operations the store exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Fetch => "fetchEmployees",
            OperationKind::Create => "createEmployee",
            OperationKind::Update => "updateEmployee",
            OperationKind::Delete => "deleteEmployee",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            OperationKind::Fetch => DEFAULT_FETCH_ERROR,
            OperationKind::Create => "Failed to create employee",
            OperationKind::Update => "Failed to update employee",
            OperationKind::Delete => "Failed to delete employee",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one dispatched operation in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A rejected store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} rejected: {message}")]
    Rejected {
        kind: OperationKind,
        message: String,
    },
}

impl StoreError {
    pub fn kind(&self) -> OperationKind {
        match self {
            StoreError::Rejected { kind, .. } => *kind,
        }
    }
}

/// Shared handle to the employee store.
///
/// Clones share one state. Each operation dispatches `Pending`, awaits the
/// service, dispatches `Fulfilled` or `Rejected`, and hands the outcome back
/// to the caller. Settlements are reduced in the order they happen, so two
/// overlapping operations on the same record resolve last-settled-wins.
#[derive(Clone)]
pub struct EmployeeStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<EmployeeState>,
    service: Arc<dyn EmployeeService>,
}

impl EmployeeStore {
    pub fn new(service: Arc<dyn EmployeeService>) -> Self {
        let (state, _) = watch::channel(EmployeeState::default());
        Self {
            inner: Arc::new(StoreInner { state, service }),
        }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> EmployeeState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every reduced state.
    pub fn subscribe(&self) -> watch::Receiver<EmployeeState> {
        self.inner.state.subscribe()
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.run(OperationKind::Fetch, EmployeeIntent::Fetch, |service| {
            Box::pin(async move { service.list().await })
        })
        .await
    }

    /// Resolves with the deleted id.
    pub async fn delete_employee(&self, id: String) -> Result<String, StoreError> {
        self.run(OperationKind::Delete, EmployeeIntent::Delete, move |service| {
            Box::pin(async move {
                service.delete(&id).await?;
                Ok(id)
            })
        })
        .await
    }

    pub async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        self.run(OperationKind::Create, EmployeeIntent::Create, move |service| {
            Box::pin(async move { service.create(employee).await })
        })
        .await
    }

    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.run(OperationKind::Update, EmployeeIntent::Update, move |service| {
            Box::pin(async move { service.update(employee).await })
        })
        .await
    }

    fn dispatch(&self, intent: EmployeeIntent) {
        self.inner.state.send_modify(|state| {
            *state = EmployeeReducer::reduce(std::mem::take(state), intent);
        });
    }

    /// Drive one operation through pending and its settlement.
    async fn run<T, F>(
        &self,
        kind: OperationKind,
        wrap: fn(Settlement<T>) -> EmployeeIntent,
        call: F,
    ) -> Result<T, StoreError>
    where
        T: Clone,
        F: FnOnce(Arc<dyn EmployeeService>) -> ServiceFuture<T>,
    {
        let op = OperationId::new();
        let span = tracing::info_span!("store_op", kind = %kind, op = %op);

        async move {
            tracing::debug!("Operation pending");
            self.dispatch(wrap(Settlement::Pending));

            match call(Arc::clone(&self.inner.service)).await {
                Ok(payload) => {
                    self.dispatch(wrap(Settlement::Fulfilled(payload.clone())));
                    tracing::info!("Operation fulfilled");
                    Ok(payload)
                }
                Err(err) => {
                    let message = err.message().map(str::to_string);
                    self.dispatch(wrap(Settlement::Rejected(message.clone())));
                    tracing::warn!(error = %err, "Operation rejected");
                    Err(StoreError::Rejected {
                        kind,
                        message: message.unwrap_or_else(|| kind.default_message().to_string()),
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}

type ServiceFuture<T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<T, ServiceError>> + Send>>;
