//! Rentflow Configuration Layer
//!
//! This crate provides configuration for the Rentflow rental cost calculator:
//! currency precision, the rounding mode applied to every monetary output,
//! and the payment plan preselected in the booking form.
//!
//! # Example
//!
//! ```rust
//! use rentflow_config::{CalculatorConfig, Validate};
//! use rentflow_core::RoundingMode;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     currency_precision = 2
//!     rounding = "half_even"
//!     currency_code = "KES"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.rounding, RoundingMode::HalfEven);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod calculator;
mod error;

pub use calculator::CalculatorConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::CalculatorConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}
