//! Implementation of the `taiga-settings show` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{flatten, list_table, output, CommandOutput};
use crate::domain::models::Configuration;
use crate::domain::Environment;
use crate::infrastructure::config::ConfigurationLoader;
use crate::infrastructure::logging::SecretRedactor;

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Print secrets instead of masking them
    #[arg(long)]
    pub reveal: bool,

    /// Output in YAML format
    #[arg(long)]
    pub yaml: bool,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowOutput {
    pub configuration: Configuration,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["setting", "value"]);
        for (key, value) in flatten(&self.to_json()) {
            table.add_row(vec![key, value]);
        }
        table.to_string()
    }
}

/// Resolve the settings, masked unless `args.reveal` is set
pub fn build(args: &ShowArgs, env: &impl Environment) -> Result<ShowOutput> {
    let configuration =
        ConfigurationLoader::load(env).context("Failed to resolve settings from the environment")?;
    let configuration = if args.reveal {
        configuration
    } else {
        SecretRedactor::new()?.redact(&configuration)
    };
    Ok(ShowOutput { configuration })
}

pub fn execute(args: &ShowArgs, env: &impl Environment, json_mode: bool) -> Result<()> {
    let output_data = build(args, env)?;
    if args.yaml && !json_mode {
        print!(
            "{}",
            serde_yaml::to_string(&output_data).context("Failed to render settings as YAML")?
        );
    } else {
        output(&output_data, json_mode);
    }
    Ok(())
}
