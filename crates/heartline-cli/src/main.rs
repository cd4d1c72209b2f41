mod cli;
mod export;
mod observability;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = heartline_config::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    observability::init_tracing_with_level(&config.logging.level);

    match cli.command {
        Commands::Export(args) => export::run(args, &config).await?,
    }

    Ok(())
}
