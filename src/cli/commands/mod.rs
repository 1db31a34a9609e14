//! Subcommand implementations.

pub mod check;
pub mod show;
pub mod vars;

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

use crate::infrastructure::environment::{load_env_file, LayeredEnvironment, ProcessEnvironment};

/// Environment commands resolve against: the process environment, with
/// the optional env file filling in unset keys.
pub type CommandEnvironment = LayeredEnvironment<ProcessEnvironment, BTreeMap<String, String>>;

pub fn environment(env_file: Option<&Path>) -> Result<CommandEnvironment> {
    let file_vars = match env_file {
        Some(path) => load_env_file(path)?,
        None => BTreeMap::new(),
    };
    Ok(LayeredEnvironment::new(ProcessEnvironment, file_vars))
}
