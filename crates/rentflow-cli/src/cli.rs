//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{BookingArgs, ConfigArgs};

/// Rentflow - Rental cost proration and payment-plan calculator
#[derive(Parser)]
#[command(name = "rentflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Calculator configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, global = true, env = "RENTFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Cost breakdown due at move-in and the next recurring payment
    Quote(BookingArgs),

    /// Every dated charge over the agreement with contract totals
    Schedule(BookingArgs),

    /// Inspect or validate the calculator configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline amount)
    Minimal,
}
