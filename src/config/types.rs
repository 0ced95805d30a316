use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated latency of the mock employee service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Delay before `list` resolves, in milliseconds (default: 1000).
    #[serde(default = "default_list_delay_ms")]
    pub list_delay_ms: u64,
    /// Delay before `create`, `update` and `delete` resolve (default: 500).
    #[serde(default = "default_mutate_delay_ms")]
    pub mutate_delay_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per table page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification stays on screen (default: 3000).
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<data_dir>/staffdesk/staffdesk.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_list_delay_ms() -> u64 {
    1000
}

fn default_mutate_delay_ms() -> u64 {
    500
}

fn default_page_size() -> usize {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            list_delay_ms: default_list_delay_ms(),
            mutate_delay_ms: default_mutate_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            tick_rate_ms: default_tick_rate_ms(),
            notice_ttl_ms: default_notice_ttl_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl ServiceConfig {
    pub fn list_delay(&self) -> Duration {
        Duration::from_millis(self.list_delay_ms)
    }

    pub fn mutate_delay(&self) -> Duration {
        Duration::from_millis(self.mutate_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("staffdesk")
                .join("staffdesk.log"),
        }
    }
}
