//! Calculator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use rentflow_core::{PaymentPlan, RoundingMode};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Largest supported number of decimal places for amounts.
pub const MAX_CURRENCY_PRECISION: u32 = 6;

// =============================================================================
// CALCULATOR CONFIGURATION
// =============================================================================

/// Settings for rental cost calculation.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Decimal places of every monetary output.
    #[serde(default = "default_currency_precision")]
    pub currency_precision: u32,

    /// Rounding applied to every monetary output.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// Plan preselected when the booking form does not supply one.
    #[serde(default)]
    pub default_payment_plan: PaymentPlan,

    /// ISO 4217 code used when displaying amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

fn default_currency_precision() -> u32 {
    2
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_precision: default_currency_precision(),
            rounding: RoundingMode::default(),
            default_payment_plan: PaymentPlan::default(),
            currency_code: None,
        }
    }
}

impl CalculatorConfig {
    /// Creates the default configuration (2 decimals, half-up, monthly).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency precision.
    pub fn with_precision(mut self, decimal_places: u32) -> Self {
        self.currency_precision = decimal_places;
        self
    }

    /// Sets the rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the default payment plan.
    pub fn with_default_plan(mut self, plan: PaymentPlan) -> Self {
        self.default_payment_plan = plan;
        self
    }

    /// Sets the display currency code.
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.currency_precision > MAX_CURRENCY_PRECISION {
            errors.push(ValidationError::new(
                "currency_precision",
                format!(
                    "must be at most {MAX_CURRENCY_PRECISION}, got {}",
                    self.currency_precision
                ),
            ));
        }

        if let Some(ref code) = self.currency_code {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
                errors.push(ValidationError::new(
                    "currency_code",
                    format!("must be three uppercase letters, got {code:?}"),
                ));
            }
        }

        errors
    }
}
