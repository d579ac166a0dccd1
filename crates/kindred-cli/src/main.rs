//! Kindred CLI - Work out how two people in a family tree are related.

use clap::Parser;
use kindred_cli::commands;
use kindred_cli::logging;
use kindred_cli::{Cli, Command, Config, Formatter, Population};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> kindred_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let population = Population::read(cli.input.as_deref())?;

    match cli.command {
        Command::Relate(args) => {
            commands::execute_relate(args, population, &config, &formatter).await?;
        }
        Command::People(args) => {
            commands::execute_people(args, population, &formatter).await?;
        }
    }

    Ok(())
}
