//! Commands the view sends to the store, and their outcomes.
//!
//! The UI thread never awaits the store. It pushes a [`UiCommand`] into a
//! bounded channel; the worker runs each command on its own task and posts
//! the [`OperationOutcome`] back as an [`AppEvent::Settled`].

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::employee::{Employee, NewEmployee};
use crate::shutdown::ShutdownHandle;
use crate::store::{EmployeeStore, StoreError};
use crate::ui::events::AppEvent;

/// Capacity of the command channel.
pub const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchEmployees,
    CreateEmployee(NewEmployee),
    UpdateEmployee(Employee),
    DeleteEmployee { id: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// How a command settled.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
    /// Number of records loaded.
    Fetched(Result<usize, StoreError>),
    Created(Result<Employee, StoreError>),
    Updated(Result<Employee, StoreError>),
    /// Id of the deleted record.
    Deleted(Result<String, StoreError>),
}

/// Run one command against the store.
pub async fn execute(store: &EmployeeStore, command: UiCommand) -> OperationOutcome {
    match command {
        UiCommand::FetchEmployees => {
            OperationOutcome::Fetched(store.fetch_employees().await.map(|list| list.len()))
        }
        UiCommand::CreateEmployee(employee) => {
            OperationOutcome::Created(store.create_employee(employee).await)
        }
        UiCommand::UpdateEmployee(employee) => {
            OperationOutcome::Updated(store.update_employee(employee).await)
        }
        UiCommand::DeleteEmployee { id } => {
            OperationOutcome::Deleted(store.delete_employee(id).await)
        }
    }
}

/// Receive commands until shutdown or until every sender is dropped.
///
/// Each command is spawned separately so a slow operation never holds up the
/// next one.
pub async fn run_command_worker(
    mut commands: mpsc::Receiver<UiCommand>,
    store: EmployeeStore,
    events: std_mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let command = tokio::select! {
            command = commands.recv() => command,
            _ = shutdown.wait() => None,
        };
        let Some(command) = command else {
            break;
        };

        tracing::debug!(?command, "UI command received");
        let store = store.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let outcome = execute(&store, command).await;
            if events.send(AppEvent::Settled(outcome)).is_err() {
                tracing::debug!("UI event loop gone, dropping outcome");
            }
        });
    }
    tracing::debug!("Command worker stopped");
}
