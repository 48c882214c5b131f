//! CLI command implementations.

pub mod config;
pub mod quote;
pub mod schedule;

pub use config::ConfigArgs;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use rentflow_config::CalculatorConfig;
use rentflow_core::{Date, Money};
use rentflow_pricing::{
    BookingSelection, ComprehensivePricing, RentalCostCalculator, RentalCostInput,
    RentalCostResult,
};

use crate::error::{CliError, CliResult};

/// Booking arguments shared by `quote` and `schedule`.
#[derive(Args, Debug)]
pub struct BookingArgs {
    /// Monthly rent
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "pricing_file")]
    pub rent: Option<String>,

    /// Refundable deposit
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub deposit: String,

    /// One-time, non-refundable fees (e.g. registration)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub fees: String,

    /// Recurring monthly service charges
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    pub service_charges: String,

    /// Pricing service response (JSON) supplying all amounts
    #[arg(short, long)]
    pub pricing_file: Option<PathBuf>,

    /// Move-in date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub move_in: Option<String>,

    /// Agreement length in whole months
    #[arg(short = 'n', long, default_value = "1", allow_hyphen_values = true)]
    pub months: i64,

    /// Payment plan: monthly or upfront. Defaults to the configured plan.
    #[arg(short = 'P', long)]
    pub plan: Option<String>,
}

impl BookingArgs {
    /// Assembles the calculator input from flags or a pricing file.
    pub fn to_input(&self, config: &CalculatorConfig) -> CliResult<RentalCostInput> {
        let move_in = match self.move_in {
            Some(ref date) => date.clone(),
            None => Date::today().to_string(),
        };
        let plan = self
            .plan
            .as_deref()
            .unwrap_or(config.default_payment_plan.as_str());
        let selection = BookingSelection::parse(&move_in, self.months, plan)?;

        if let Some(ref path) = self.pricing_file {
            let payload = read_file(path)?;
            let pricing = ComprehensivePricing::from_json(&payload)?;
            return Ok(pricing.to_input(selection)?);
        }

        let rent = self
            .rent
            .as_deref()
            .ok_or_else(|| CliError::MissingArgument("--rent or --pricing-file".to_string()))?;

        Ok(RentalCostInput::new(parse_amount("--rent", "monthly_rent", rent)?, selection)
            .with_deposit(parse_amount("--deposit", "deposit", &self.deposit)?)
            .with_fees(parse_amount("--fees", "one_time_fees", &self.fees)?)
            .with_service_charges(parse_amount(
                "--service-charges",
                "monthly_service_charges",
                &self.service_charges,
            )?))
    }

    /// Computes the cost breakdown with the configured calculator.
    pub fn calculate(&self, config: &CalculatorConfig) -> CliResult<RentalCostResult> {
        let input = self.to_input(config)?;
        Ok(RentalCostCalculator::with_config(config).calculate(&input)?)
    }
}

/// Parses a decimal flag value into a non-negative amount.
pub fn parse_amount(flag: &'static str, field: &str, value: &str) -> CliResult<Money> {
    let decimal = Decimal::from_str(value.trim()).map_err(|_| CliError::InvalidAmount {
        flag,
        value: value.to_string(),
    })?;
    Ok(Money::try_new(field, decimal)?)
}

/// Loads the configuration file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> CliResult<CalculatorConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading calculator configuration");
            Ok(CalculatorConfig::from_file(path)?)
        }
        None => Ok(CalculatorConfig::default()),
    }
}

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}
