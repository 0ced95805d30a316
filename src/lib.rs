pub mod cli;
pub mod config;
pub mod employee;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod store;
pub mod ui;
