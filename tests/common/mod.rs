//! Shared test utilities and service doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use parking_lot::Mutex;
use staffdesk::employee::{Employee, EmployeeService, NewEmployee, ServiceError};
use staffdesk::store::EmployeeStore;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

/// Service whose every call fails with the same error.
pub struct FailingService {
    error: ServiceError,
}

impl FailingService {
    pub fn with_message(message: &str) -> Self {
        Self {
            error: ServiceError::failed(message),
        }
    }

    pub fn without_message() -> Self {
        Self {
            error: ServiceError::Unspecified,
        }
    }
}

#[async_trait]
impl EmployeeService for FailingService {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Err(self.error.clone())
    }

    async fn create(&self, _employee: NewEmployee) -> Result<Employee, ServiceError> {
        Err(self.error.clone())
    }

    async fn update(&self, _employee: Employee) -> Result<Employee, ServiceError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: &str) -> Result<bool, ServiceError> {
        Err(self.error.clone())
    }
}

pub type ListReply = Result<Vec<Employee>, ServiceError>;

/// Service whose `list` calls block until the test releases them, so tests
/// choose the order in which overlapping fetches settle.
#[derive(Default)]
pub struct GatedService {
    pending: Mutex<VecDeque<oneshot::Sender<ListReply>>>,
    calls: AtomicUsize,
}

impl GatedService {
    /// Number of `list` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Wait until `count` list calls are parked.
    pub async fn wait_for_calls(&self, count: usize) {
        for _ in 0..1000 {
            if self.calls() >= count {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} list calls, saw {}", count, self.calls());
    }

    /// Settle the `index`th parked call (0 = oldest still parked).
    pub fn release(&self, index: usize, reply: ListReply) {
        let sender = self
            .pending
            .lock()
            .remove(index)
            .expect("no parked list call at index");
        let _ = sender.send(reply);
    }
}

#[async_trait]
impl EmployeeService for GatedService {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().push_back(tx);
        self.calls.fetch_add(1, Ordering::SeqCst);
        rx.await
            .unwrap_or_else(|_| Err(ServiceError::failed("gate dropped")))
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, ServiceError> {
        Ok(employee.with_id("gated"))
    }

    async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
        Ok(employee)
    }

    async fn delete(&self, _id: &str) -> Result<bool, ServiceError> {
        Ok(true)
    }
}

pub fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: name.to_string(),
        address: "1 ถนนทดสอบ แขวงทดสอบ".to_string(),
    }
}

pub fn store_with(service: impl EmployeeService + 'static) -> EmployeeStore {
    EmployeeStore::new(Arc::new(service))
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
