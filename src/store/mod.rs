//! Employee store: one owned state slice, a pure reducer, and the four
//! asynchronous operations that are the only way to change it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The `{employees, loading, error}` slice
//! - `intent.rs` - Operation settlements (pending, fulfilled, rejected)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `handle.rs` - Async operations wrapping the employee service

mod handle;
mod intent;
mod reducer;
mod state;

pub use handle::{EmployeeStore, OperationId, OperationKind, StoreError};
pub use intent::{EmployeeIntent, Settlement};
pub use reducer::{EmployeeReducer, DEFAULT_FETCH_ERROR};
pub use state::EmployeeState;
