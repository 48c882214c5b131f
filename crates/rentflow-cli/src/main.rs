//! Rentflow CLI - Command-line interface for rental cost calculation.
//!
//! # Usage
//!
//! ```bash
//! # Quote a mid-month move-in on the monthly plan
//! rentflow quote --rent 15000 --deposit 15000 --fees 1000 --service-charges 500 \
//!     --move-in 2024-01-16 --months 6 --plan monthly
//!
//! # Use a pricing service response instead of explicit amounts
//! rentflow quote --pricing-file room-42.json --move-in 2024-03-01 --months 3 --plan upfront
//!
//! # Every dated charge over the agreement
//! rentflow schedule --rent 15000 --move-in 2024-01-16 --months 6
//!
//! # Inspect the active configuration
//! rentflow --config rentflow.toml config show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Quote(args) => commands::quote::execute(&args, &config, format)?,
        Commands::Schedule(args) => commands::schedule::execute(&args, &config, format)?,
        Commands::Config(args) => commands::config::execute(&args, &config, cli.config.as_deref(), format)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rentflow_pricing=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
