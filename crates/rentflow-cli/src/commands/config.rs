//! Config command implementation.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use rentflow_config::{CalculatorConfig, Validate};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_json, print_success};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Check the configuration against its constraints
    Validate,
}

/// Executes the config command.
pub fn execute(
    args: &ConfigArgs,
    config: &CalculatorConfig,
    source: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => print_json(config),
            _ => {
                print!("{}", config.to_toml_string().map_err(CliError::from)?);
                Ok(())
            }
        },
        ConfigCommand::Validate => {
            config.validate_or_error().map_err(CliError::from)?;
            let origin = source
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in defaults".to_string());
            print_success(&format!("Configuration is valid ({origin})"));
            Ok(())
        }
    }
}
