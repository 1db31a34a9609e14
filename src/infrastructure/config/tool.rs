use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::infrastructure::logging::LogConfig;

/// Prefix of environment variables configuring the tool itself
pub const TOOL_ENV_PREFIX: &str = "TAIGA_SETTINGS_";

/// Tool configuration error types
#[derive(Error, Debug)]
pub enum ToolConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Log directory cannot be empty")]
    EmptyLogDir,
}

/// Settings of the `taiga-settings` tool, separate from the settings it
/// resolves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub logging: LogConfig,
}

/// Loads `ToolConfig` with hierarchical merging
pub struct ToolConfigLoader;

impl ToolConfigLoader {
    /// Load tool configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML file given with `--tool-config` (optional)
    /// 3. Environment variables (`TAIGA_SETTINGS_*`, `__` separates levels)
    pub fn load(path: Option<&Path>) -> Result<ToolConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(ToolConfig::default()));
        if let Some(path) = path {
            anyhow::ensure!(
                path.exists(),
                "Tool config file {} does not exist",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        let config: ToolConfig = figment
            .merge(Env::prefixed(TOOL_ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract tool configuration")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &ToolConfig) -> Result<(), ToolConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ToolConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config
            .logging
            .log_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(ToolConfigError::EmptyLogDir);
        }

        Ok(())
    }
}
