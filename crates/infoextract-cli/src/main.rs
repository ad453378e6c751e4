//! Infoextract CLI - Pull structured records out of free text with an LLM.

use clap::Parser;
use infoextract_cli::commands;
use infoextract_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean result document.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> infoextract_cli::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Models => commands::execute_models(&formatter)?,
        Command::Run(args) => {
            let extractor = commands::build_extractor(&config, cli.api_key.as_deref())?;
            commands::execute_run(args, &extractor, &formatter).await?;
        }
        Command::Extract(args) => {
            let extractor = commands::build_extractor(&config, cli.api_key.as_deref())?;
            commands::execute_extract(args, &extractor, &formatter).await?;
        }
    }

    Ok(())
}
