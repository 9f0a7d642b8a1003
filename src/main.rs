//! Issue Relay CLI entry point.

use anyhow::Context;
use clap::Parser;

use issue_relay::cli::{commands, Cli};
use issue_relay::infrastructure::logging::{LogConfig, LoggerImpl};
use issue_relay::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        issue_relay::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    // Held until exit so buffered file output is flushed.
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    commands::sync::execute(cli.command, &config, cli.json).await
}
