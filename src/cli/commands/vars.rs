//! Implementation of the `taiga-settings vars` command.

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::cli::output::{list_table, output, CommandOutput};
use crate::domain::Environment;
use crate::infrastructure::config::variables::{self, ValueKind};
use crate::infrastructure::environment::LayeredEnvironment;
use crate::infrastructure::logging::MASK;

/// Where the effective value of a variable comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Environment,
    EnvFile,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Environment => "environment",
            Self::EnvFile => "env file",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Serialize)]
pub struct VarEntry {
    pub key: &'static str,
    pub kind: ValueKind,
    pub default: &'static str,
    pub source: ValueSource,
    /// Raw effective value, masked for secrets
    pub value: String,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VarsOutput {
    pub variables: Vec<VarEntry>,
}

impl CommandOutput for VarsOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["variable", "kind", "source", "value", "description"]);
        for entry in &self.variables {
            table.add_row(vec![
                entry.key.to_string(),
                entry.kind.to_string(),
                entry.source.to_string(),
                entry.value.clone(),
                entry.description.to_string(),
            ]);
        }
        table.to_string()
    }
}

pub fn build<P: Environment, F: Environment>(env: &LayeredEnvironment<P, F>) -> Result<VarsOutput> {
    let mut entries = Vec::with_capacity(variables::ALL.len());

    for var in variables::ALL {
        let (source, raw) = if let Some(value) = env.primary().var(var.key)? {
            (ValueSource::Environment, value)
        } else if let Some(value) = env.fallback().var(var.key)? {
            (ValueSource::EnvFile, value)
        } else {
            (ValueSource::Default, var.default.to_string())
        };

        let value = if var.secret && !raw.is_empty() {
            MASK.to_string()
        } else {
            raw
        };

        entries.push(VarEntry {
            key: var.key,
            kind: var.kind,
            default: var.default,
            source,
            value,
            description: var.description,
        });
    }

    Ok(VarsOutput { variables: entries })
}

pub fn execute<P: Environment, F: Environment>(
    env: &LayeredEnvironment<P, F>,
    json_mode: bool,
) -> Result<()> {
    let output_data = build(env)?;
    output(&output_data, json_mode);
    Ok(())
}
