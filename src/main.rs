//! taiga-settings CLI entry point.

use anyhow::Result;
use clap::Parser;

use taiga_settings::cli::{self, commands, Cli, Commands};
use taiga_settings::infrastructure::config::ToolConfigLoader;
use taiga_settings::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli) {
        cli::handle_error(&err, json_mode);
    }
}

fn run(cli: Cli) -> Result<()> {
    let tool_config = ToolConfigLoader::load(cli.tool_config.as_deref())?;
    let _logger = LoggerImpl::init(&tool_config.logging)?;

    let env = commands::environment(cli.env_file.as_deref())?;

    match cli.command {
        Commands::Show(args) => commands::show::execute(&args, &env, cli.json),
        Commands::Check(args) => commands::check::execute(&args, &env, cli.json),
        Commands::Vars => commands::vars::execute(&env, cli.json),
    }
}
