//! Terminal front end for the employee records page.
//!
//! Each widget with state follows MVI (state, intent, reducer, view); `App`
//! owns those states and talks to the store only through [`command`].

pub mod app;
pub mod command;
pub mod confirm;
pub mod employee_form;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod search;
pub mod sidebar;
pub mod strings;
pub mod table;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
