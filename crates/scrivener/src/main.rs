//! Scrivener CLI binary.
//!
//! - `scrivener serve` starts the web UI
//! - `scrivener write <TOPIC>` writes a report from the terminal

use clap::Parser;
use scrivener::{ObservabilityConfig, ScrivenerConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, handle_serve_command, handle_write_command};

    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let _guard = init_observability(&ObservabilityConfig::default().with_log_level(log_level))
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = ScrivenerConfig::load_from(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => {
            handle_serve_command(config, bind).await?;
        }

        Commands::Write { topic, out, pdf } => {
            handle_write_command(config, &topic, out, pdf).await?;
        }
    }

    Ok(())
}
