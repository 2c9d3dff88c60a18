use serde::Deserialize;

use super::filter::FiltersConfig;

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    /// Default: "info"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Show module path (target) in log messages
    /// Default: false
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), show_target: false }
    }
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Prepended to every generated cache key
    /// Must be identical on every node sharing a counter backend
    /// Default: "" (no prefix)
    #[serde(default)]
    pub cache_key_prefix: String,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Allow/deny lists consulted for the edge per-IP domain
    #[serde(default)]
    pub filters: FiltersConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}
