mod cli;
mod commands;
mod config;
mod output;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands, OutputFormat};
use config::Config;
use eol_data::{EolClient, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "eol", &mut io::stdout());
        }
        command => {
            let config = Config::load()?;
            output::set_format(OutputFormat::resolve(cli.json, cli.format, config.format));

            let client = match config.base_url(cli.base_url.as_deref())? {
                Some(base_url) => EolClient::with_base_url(base_url),
                None => EolClient::new(),
            };
            tracing::debug!(base_url = client.base_url(), "using API");

            match command {
                Commands::Products { matching } => {
                    commands::products::list(&client, matching.as_deref()).await?;
                }
                Commands::Cycles(args) => {
                    commands::cycles::list(&client, args).await?;
                }
                Commands::Cycle { product, cycle } => {
                    commands::cycles::view(&client, &product, &cycle).await?;
                }
                Commands::Completions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
