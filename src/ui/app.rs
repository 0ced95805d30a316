use crate::config::UiConfig;
use crate::employee::Employee;
use crate::mvi::Reducer;
use crate::store::{EmployeeState, StoreError};
use crate::ui::command::{OperationOutcome, UiCommand, UiCommandSender};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::employee_form::{FormDialogState, FormIntent, FormReducer};
use crate::ui::notice::{NoticeIntent, NoticeKind, NoticeReducer, NoticeState};
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::strings;
use crate::ui::table::{TableIntent, TableReducer, TableState};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Which part of the page owns the keyboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
    Form,
    Confirm,
}

pub struct App {
    should_quit: bool,
    /// Latest store state, refreshed by `sync_store`.
    employees: EmployeeState,
    store_rx: watch::Receiver<EmployeeState>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    search: SearchState,
    table: TableState,
    form_dialog: FormDialogState,
    /// Bumped every time the form dialog is opened.
    form_session: u64,
    /// Session of the form whose create/update is in flight. Outlives the
    /// dialog: closing and reopening does not allow a second save.
    submit_in_flight: Option<u64>,
    /// Error notice to show if the re-fetch after a mutation fails.
    refetch_failure: Option<&'static str>,
    confirm_dialog: ConfirmDialogState,
    notices: NoticeState,
    notice_ttl: Duration,
    animation_tick: u8,
}

impl App {
    pub fn new(store_rx: watch::Receiver<EmployeeState>, config: &UiConfig) -> Self {
        let employees = store_rx.borrow().clone();
        Self {
            should_quit: false,
            employees,
            store_rx,
            command_sender: None,
            last_command_error: None,
            search: SearchState::default(),
            table: TableState::with_page_size(config.page_size),
            form_dialog: FormDialogState::default(),
            form_session: 0,
            submit_in_flight: None,
            refetch_failure: None,
            confirm_dialog: ConfirmDialogState::default(),
            notices: NoticeState::default(),
            notice_ttl: config.notice_ttl(),
            animation_tick: 0,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        if self.confirm_dialog.is_visible() {
            Focus::Confirm
        } else if self.form_dialog.is_visible() {
            Focus::Form
        } else if self.search.is_editing() {
            Focus::Search
        } else {
            Focus::Table
        }
    }

    pub fn employee_state(&self) -> &EmployeeState {
        &self.employees
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn form_dialog(&self) -> &FormDialogState {
        &self.form_dialog
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm_dialog
    }

    pub fn notices(&self) -> &NoticeState {
        &self.notices
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// A create or update is in flight; further submits are ignored.
    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight.is_some()
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Pull the latest store state if it changed since the last call.
    pub fn sync_store(&mut self) {
        if !self.store_rx.has_changed().unwrap_or(false) {
            return;
        }
        self.employees = self.store_rx.borrow_and_update().clone();
        let total = self.visible_employees().len();
        dispatch_mvi!(self, table, TableReducer, TableIntent::Clamp { total });
    }

    /// Records matching the applied search, in store order.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        self.search.applied.apply(&self.employees.employees)
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        let rows = self.visible_employees();
        let index = self.table.selected_index(rows.len())?;
        rows.get(index).copied()
    }

    /// Initial load.
    pub fn start(&mut self) {
        self.send_command(UiCommand::FetchEmployees);
    }

    pub fn reload(&mut self) {
        self.send_command(UiCommand::FetchEmployees);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if !self.notices.is_empty() {
            dispatch_mvi!(self, notices, NoticeReducer, NoticeIntent::Expire { now });
        }
    }

    // Table

    pub fn dispatch_table(&mut self, intent: impl FnOnce(usize) -> TableIntent) {
        let total = self.visible_employees().len();
        dispatch_mvi!(self, table, TableReducer, intent(total));
    }

    // Search

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        let resets_rows = matches!(intent, SearchIntent::Submit | SearchIntent::Clear);
        dispatch_mvi!(self, search, SearchReducer, intent);
        if resets_rows {
            dispatch_mvi!(self, table, TableReducer, TableIntent::Reset);
        }
    }

    // Form dialog

    pub fn open_create(&mut self) {
        self.form_session += 1;
        dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::OpenCreate);
    }

    pub fn open_edit_selected(&mut self) {
        let Some(employee) = self.selected_employee().cloned() else {
            return;
        };
        self.form_session += 1;
        dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::OpenEdit { employee });
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form_dialog, FormReducer, intent);
    }

    pub fn cancel_form(&mut self) {
        dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::Close);
    }

    /// Validate the form and send the create or update command.
    ///
    /// Ignored while a previous submit is still in flight, even one made from
    /// a form that has since been closed.
    pub fn submit_form(&mut self) {
        if self.is_submitting() {
            return;
        }
        let Some(form) = self.form_dialog.form() else {
            return;
        };

        let command = if form.is_edit() {
            match form.to_employee() {
                Ok(Some(employee)) => UiCommand::UpdateEmployee(employee),
                Ok(None) => return,
                Err(errors) => {
                    dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::Rejected { errors });
                    return;
                }
            }
        } else {
            match form.to_new_employee() {
                Ok(employee) => UiCommand::CreateEmployee(employee),
                Err(errors) => {
                    dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::Rejected { errors });
                    return;
                }
            }
        };

        if self.send_command(command) {
            self.submit_in_flight = Some(self.form_session);
        } else {
            self.push_notice(NoticeKind::Error, strings::SUBMIT_FAILED, Instant::now());
        }
    }

    // Delete confirmation

    pub fn request_delete_selected(&mut self) {
        let Some(employee) = self.selected_employee() else {
            return;
        };
        let intent = ConfirmIntent::Open {
            id: employee.id.clone(),
            name: employee.first_name.clone(),
        };
        dispatch_mvi!(self, confirm_dialog, ConfirmReducer, intent);
    }

    pub fn toggle_confirm_button(&mut self) {
        dispatch_mvi!(self, confirm_dialog, ConfirmReducer, ConfirmIntent::ToggleButton);
    }

    /// Close the dialog, deleting the record if "delete" was the choice.
    pub fn confirm_delete(&mut self) {
        let id = self.confirm_dialog.confirmed_id().map(str::to_string);
        dispatch_mvi!(self, confirm_dialog, ConfirmReducer, ConfirmIntent::Close);
        if let Some(id) = id {
            if !self.send_command(UiCommand::DeleteEmployee { id }) {
                self.push_notice(NoticeKind::Error, strings::DELETE_FAILED, Instant::now());
            }
        }
    }

    pub fn cancel_confirm(&mut self) {
        dispatch_mvi!(self, confirm_dialog, ConfirmReducer, ConfirmIntent::Close);
    }

    // Outcomes

    pub fn on_outcome(&mut self, outcome: OperationOutcome, now: Instant) {
        match outcome {
            OperationOutcome::Fetched(Ok(count)) => {
                tracing::debug!(count, "Employees loaded");
                self.refetch_failure = None;
            }
            // Also shown from the store's error field.
            OperationOutcome::Fetched(Err(err)) => {
                tracing::warn!(error = %err, "Employee fetch failed");
                if let Some(text) = self.refetch_failure.take() {
                    self.push_notice(NoticeKind::Error, text, now);
                }
            }
            OperationOutcome::Created(result) => {
                self.on_submit_settled(result.map(|_| ()), strings::CREATE_SUCCESS, now)
            }
            OperationOutcome::Updated(result) => {
                self.on_submit_settled(result.map(|_| ()), strings::UPDATE_SUCCESS, now)
            }
            OperationOutcome::Deleted(Ok(id)) => {
                tracing::info!(%id, "Employee deleted");
                self.push_notice(NoticeKind::Success, strings::DELETE_SUCCESS, now);
                self.reload_after_mutation(strings::DELETE_FAILED);
            }
            OperationOutcome::Deleted(Err(err)) => {
                tracing::warn!(error = %err, "Employee delete failed");
                self.push_notice(NoticeKind::Error, strings::DELETE_FAILED, now);
            }
        }
    }

    fn on_submit_settled(
        &mut self,
        result: Result<(), StoreError>,
        success: &'static str,
        now: Instant,
    ) {
        let submitted_session = self.submit_in_flight.take();
        match result {
            Ok(()) => {
                self.push_notice(NoticeKind::Success, success, now);
                // A form opened after the submit is left alone.
                if submitted_session == Some(self.form_session) {
                    dispatch_mvi!(self, form_dialog, FormReducer, FormIntent::Close);
                }
                self.reload_after_mutation(strings::SUBMIT_FAILED);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Employee submit failed");
                self.push_notice(NoticeKind::Error, strings::SUBMIT_FAILED, now);
            }
        }
    }

    fn reload_after_mutation(&mut self, failure: &'static str) {
        self.refetch_failure = Some(failure);
        self.reload();
    }

    fn push_notice(&mut self, kind: NoticeKind, text: &str, now: Instant) {
        let intent = NoticeIntent::Push {
            kind,
            text: text.to_string(),
            expires_at: now + self.notice_ttl,
        };
        dispatch_mvi!(self, notices, NoticeReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "UI command send failed");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
