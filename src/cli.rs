//! Command line flags. Every flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "staffdesk", version, about = "Employee records in the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/staffdesk/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `staffdesk::store=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log file (default: <data dir>/staffdesk/staffdesk.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Table rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}

impl Cli {
    /// Load the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config)?;
        Ok(config)
    }

    /// Apply the flag overrides and re-validate.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(page_size) = self.page_size {
            config.ui.page_size = page_size;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config.validate()
    }
}
