//! Implementation of the `taiga-settings check` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::SecurityWarning;
use crate::domain::Environment;
use crate::infrastructure::config::ConfigurationLoader;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Fail when any insecure setting is found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct WarningEntry {
    pub warning: SecurityWarning,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub message: String,
    pub base_url: String,
    pub task_queue_enabled: bool,
    pub warnings: Vec<WarningEntry>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        lines.push(format!("  base url:   {}", self.base_url));
        lines.push(format!(
            "  task queue: {}",
            if self.task_queue_enabled { "enabled" } else { "disabled" }
        ));
        if !self.warnings.is_empty() {
            lines.push(format!("\n{} warning(s):", self.warnings.len()));
            for entry in &self.warnings {
                lines.push(format!("  - {}", entry.message));
            }
        }
        lines.join("\n")
    }
}

pub fn build(args: &CheckArgs, env: &impl Environment) -> Result<CheckOutput> {
    let configuration =
        ConfigurationLoader::load(env).context("Failed to resolve settings from the environment")?;

    let warnings: Vec<WarningEntry> = configuration
        .security_warnings()
        .into_iter()
        .map(|warning| WarningEntry {
            message: warning.to_string(),
            warning,
        })
        .collect();

    let success = !args.strict || warnings.is_empty();
    let message = if success {
        "Settings resolved successfully.".to_string()
    } else {
        "Settings resolved, but insecure values were found.".to_string()
    };

    Ok(CheckOutput {
        success,
        message,
        base_url: configuration.sites.base_url,
        task_queue_enabled: configuration.task_queue.enabled,
        warnings,
    })
}

pub fn execute(args: &CheckArgs, env: &impl Environment, json_mode: bool) -> Result<()> {
    let output_data = build(args, env)?;
    output(&output_data, json_mode);
    if !output_data.success {
        anyhow::bail!(
            "{} insecure setting(s) found in strict mode",
            output_data.warnings.len()
        );
    }
    Ok(())
}
