use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::check::CheckArgs;
use super::commands::show::ShowArgs;

#[derive(Parser, Debug)]
#[command(name = "taiga-settings")]
#[command(about = "Resolve Taiga backend settings from the environment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Read variables missing from the process environment from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// YAML file with settings for this tool (logging)
    #[arg(long, global = true, value_name = "PATH")]
    pub tool_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved settings
    Show(ShowArgs),

    /// Resolve the settings and report insecure values
    Check(CheckArgs),

    /// List recognized environment variables and where their values come from
    Vars,
}
