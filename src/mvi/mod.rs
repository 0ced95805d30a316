//! Model-View-Intent (MVI) architecture primitives.
//!
//! Shared by the employee store and the UI dialogs: every state change in
//! the application goes through a reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a state slice
//! - **Intent**: User actions or operation settlements
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
