//! Demo configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Settings for the demo binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// NDJSON file the queue traces are appended to
    pub log_path: PathBuf,

    /// Number of items pushed through each queue variant
    pub items: usize,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("output.ndjson"),
            items: 10,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl DemoConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DSA_LOG_PATH`: trace output file (default: output.ndjson)
    /// - `DSA_ITEMS`: items per queue run (default: 10)
    /// - `DSA_LOG_LEVEL` or `RUST_LOG`: log level (default: info)
    /// - `DSA_JSON_LOGS`: JSON log output (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            log_path: lookup("DSA_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),

            items: lookup("DSA_ITEMS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.items),

            log_level: lookup("DSA_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("DSA_JSON_LOGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }
}
