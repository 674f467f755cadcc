pub mod cli;
pub mod config;
pub mod domain;
pub mod git;
pub mod hooks;

pub(crate) mod command;
pub(crate) mod path;

use std::path::Path;

use cli::Commands;
use config::Config;
use hooks::WriteMode;

/// Run one CLI subcommand against the configured hooks directory.
///
/// This is the binary entry point. Library callers wanting finer control
/// should use [`hooks::HookFileWriter`] and [`git::GitCli`] directly.
pub fn run(subcommand: Commands, config_path: Option<&Path>) -> miette::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let writer = config.writer();

    match subcommand {
        Commands::Install => cli::install::run(&writer, &config.git()),
        Commands::Set { name, command } => cli::write::run(&writer, &name, &command, WriteMode::Set),
        Commands::Add { name, command } => cli::write::run(&writer, &name, &command, WriteMode::Add),
        Commands::List { json } => cli::list::run(&writer, json),
        Commands::Uninstall => cli::uninstall::run(&config.git()),
        Commands::Status => cli::status::run(&writer, &config.git()),
    }
}
