//! Quote command implementation.

use anyhow::Result;
use rentflow_config::CalculatorConfig;
use rentflow_pricing::RentalCostResult;

use super::BookingArgs;
use crate::cli::OutputFormat;
use crate::output::{format_amount, print_header, print_json, print_rows, KeyValue};

/// Executes the quote command.
pub fn execute(args: &BookingArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let result = args.calculate(config)?;

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Minimal => {
            println!(
                "{}",
                format_amount(result.costs.total_move_in_cost, config.currency_precision, None)
            );
            Ok(())
        }
        OutputFormat::Csv => print_rows(&quote_rows(&result, config), format),
        OutputFormat::Table => {
            print_header(&format!(
                "Move-in {} ({} month(s), {} plan)",
                result.move_in_date, result.duration_months, result.payment_plan
            ));
            print_rows(&quote_rows(&result, config), format)
        }
    }
}

fn quote_rows(result: &RentalCostResult, config: &CalculatorConfig) -> Vec<KeyValue> {
    let amount = |value| {
        format_amount(
            value,
            config.currency_precision,
            config.currency_code.as_deref(),
        )
    };
    let breakdown = &result.breakdown;
    let costs = &result.costs;

    let mut rows = vec![
        KeyValue::new("Monthly rent", amount(costs.monthly_rent)),
        KeyValue::new(
            "Active days",
            format!("{} of {}", breakdown.active_days, breakdown.days_in_month),
        ),
        KeyValue::new("Daily rate", amount(breakdown.daily_rate)),
        KeyValue::new("First month (prorated)", amount(breakdown.prorated_first_month)),
    ];
    if !breakdown.remaining_months_cost.is_zero() {
        rows.push(KeyValue::new(
            "Remaining months (prepaid)",
            amount(breakdown.remaining_months_cost),
        ));
    }
    rows.extend([
        KeyValue::new("Refundable deposit", amount(costs.deposit)),
        KeyValue::new("One-time fees", amount(costs.fees)),
        KeyValue::new("Total due at move-in", amount(costs.total_move_in_cost)),
        KeyValue::new("  refundable", amount(costs.refundable_at_move_in)),
        KeyValue::new("  non-refundable", amount(costs.non_refundable_at_move_in)),
        KeyValue::new("Next monthly payment", amount(costs.next_monthly_payment)),
        KeyValue::new("Next payment date", result.next_payment_date.to_string()),
    ]);
    rows
}
