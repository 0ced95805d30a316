//! Employee records: the data model, the service contract the store talks
//! to, and the in-memory mock that stands in for a real backend.

mod form;
mod mock;
mod model;
mod search;
mod service;

pub use form::{EmployeeForm, FormError, FormField, ADDRESS_MAX_CHARS};
pub use mock::{sample_employees, IdGenerator, MockEmployeeService};
pub use model::{Employee, NewEmployee};
pub use search::SearchQuery;
pub use service::{EmployeeService, ServiceError};
