//! Configuration loading for staffdesk.
//!
//! Settings live in a single TOML file. Every section is optional and
//! falls back to defaults, so a missing file is a valid configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ServiceConfig, UiConfig};
