//! CLI error types.

use rentflow_config::ConfigError;
use rentflow_core::RentflowError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The booking cannot be priced.
    #[error("Unable to calculate pricing: {0}")]
    Pricing(#[from] RentflowError),

    /// Invalid amount on the command line.
    #[error("Invalid amount for {flag}: {value:?} is not a decimal number")]
    InvalidAmount {
        /// Flag that carried the value.
        flag: &'static str,
        /// Raw value.
        value: String,
    },

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File that was read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
