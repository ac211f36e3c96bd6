//! CLI module.

use anyhow::Result;
use clap::Parser;
use github_explorer_config::Config;
use github_explorer_logging::configure_logging;

use crate::args::{Args, CommandExecutor};

pub(crate) mod args;
mod commands;
#[cfg(test)]
mod testutils;

/// Configure application startup.
pub fn configure_startup() -> Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    configure_logging(&config)?;

    Ok(config)
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    let config = configure_startup()?;
    let args = Args::parse();

    CommandExecutor::parse_args(config, args)
}
