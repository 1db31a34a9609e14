use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how `taiga-settings` reports its own diagnostics
///
/// Read from the `logging` section of the tool settings. The resolved
/// backend configuration never flows through here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level emitted; `RUST_LOG` directives refine it
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console rendering; file output is always JSON
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Also write `taiga-settings.log` here when set
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// When the log file under `log_dir` is rolled over
    #[serde(default)]
    pub rotation: RotationPolicy,
}

/// Console log rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

// stdout carries command output; stderr shows problems only.
fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}
