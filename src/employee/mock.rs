//! In-memory stand-in for a backend employee API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use super::model::{Employee, NewEmployee};
use super::service::{EmployeeService, ServiceError};
use crate::config::ServiceConfig;

/// The fixed records returned by [`MockEmployeeService::list`].
pub fn sample_employees() -> Vec<Employee> {
    [
        ("1234500001", "กาญจนา สีทอง", "46/1"),
        ("1234500002", "ตะวัน สุขใจ", "46/2"),
        ("1234500003", "จิราพร เกียรตินิยม", "46/3"),
        ("1234500004", "มินตรา โชคชัย", "46/4"),
    ]
    .into_iter()
    .map(|(id, name, house)| Employee {
        id: id.to_string(),
        first_name: name.to_string(),
        address: format!(
            "{} หมู่ 9 หมู่บ้านเมืองทอง พัฒนาการ66 แขวงประเวศ เขต ประเวศ กทม. 10800",
            house
        ),
    })
    .collect()
}

/// Timestamp-based id source.
///
/// Ids are the current Unix time in milliseconds, bumped past the last issued
/// id when the clock has not advanced, so ids are unique per generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the system clock.
    pub fn next(&self) -> String {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        self.next_at(now_ms)
    }

    /// Next id for a clock reading of `now_ms`.
    pub fn next_at(&self, now_ms: u64) -> String {
        let mut issued = now_ms;
        // fetch_update only fails when the closure returns None.
        let _ = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                issued = now_ms.max(last.saturating_add(1));
                Some(issued)
            });
        issued.to_string()
    }
}

/// Mock service: sleeps for the configured latency, then succeeds.
pub struct MockEmployeeService {
    list_delay: Duration,
    mutate_delay: Duration,
    ids: IdGenerator,
}

impl MockEmployeeService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_delays(config.list_delay(), config.mutate_delay())
    }

    pub fn with_delays(list_delay: Duration, mutate_delay: Duration) -> Self {
        Self {
            list_delay,
            mutate_delay,
            ids: IdGenerator::new(),
        }
    }

    /// No latency at all. Used by tests.
    pub fn instant() -> Self {
        Self::with_delays(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for MockEmployeeService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

#[async_trait]
impl EmployeeService for MockEmployeeService {
    async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        tokio::time::sleep(self.list_delay).await;
        Ok(sample_employees())
    }

    async fn create(&self, employee: NewEmployee) -> Result<Employee, ServiceError> {
        tokio::time::sleep(self.mutate_delay).await;
        let id = self.ids.next();
        tracing::debug!(id = %id, "Mock service assigned employee id");
        Ok(employee.with_id(id))
    }

    async fn update(&self, employee: Employee) -> Result<Employee, ServiceError> {
        tokio::time::sleep(self.mutate_delay).await;
        Ok(employee)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        tokio::time::sleep(self.mutate_delay).await;
        tracing::debug!(id = %id, "Mock service deleted employee");
        Ok(true)
    }
}
