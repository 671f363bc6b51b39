//! Watcher configuration types.

use serde::{Deserialize, Serialize};

/// Compile-time default for the prediction service base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Top-level watcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Base URL of the prediction service, no trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timing parameters (seconds).
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Polling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Seconds between automatic refresh cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Seconds between heartbeat log lines.
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_heartbeat_interval() -> u64 {
    30
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            heartbeat_interval_secs: default_heartbeat_interval(),
        }
    }
}
