//! Schedule command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use rentflow_config::CalculatorConfig;
use rentflow_core::ChargeSchedule;
use rentflow_pricing::{build_payment_schedule, contract_summary, ContractSummary, RentalCostResult};

use super::BookingArgs;
use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{format_amount, print_header, print_json, print_rows, KeyValue};

/// One row of the charge table.
#[derive(Debug, Serialize, Tabled)]
struct ChargeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Charge")]
    charge: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Serialize)]
struct ScheduleReport<'a> {
    result: &'a RentalCostResult,
    charges: &'a ChargeSchedule,
    summary: &'a ContractSummary,
}

/// Executes the schedule command.
pub fn execute(args: &BookingArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let result = args.calculate(config)?;
    let (schedule, summary) = expand(&result)?;

    match format {
        OutputFormat::Json => print_json(&ScheduleReport {
            result: &result,
            charges: &schedule,
            summary: &summary,
        }),
        OutputFormat::Minimal => {
            println!(
                "{}",
                format_amount(summary.grand_total, config.currency_precision, None)
            );
            Ok(())
        }
        OutputFormat::Csv => print_rows(&charge_rows(&schedule, config), format),
        OutputFormat::Table => {
            print_header("Charges");
            print_rows(&charge_rows(&schedule, config), format)?;
            print_header("Contract totals");
            print_rows(&summary_rows(&summary, config), format)
        }
    }
}

fn expand(result: &RentalCostResult) -> CliResult<(ChargeSchedule, ContractSummary)> {
    let schedule = build_payment_schedule(result)?;
    let summary = contract_summary(&schedule)?;
    Ok((schedule, summary))
}

fn charge_rows(schedule: &ChargeSchedule, config: &CalculatorConfig) -> Vec<ChargeRow> {
    schedule
        .iter()
        .map(|charge| ChargeRow {
            date: charge.date().to_string(),
            charge: charge.kind().to_string(),
            amount: format_amount(
                charge.amount(),
                config.currency_precision,
                config.currency_code.as_deref(),
            ),
        })
        .collect()
}

fn summary_rows(summary: &ContractSummary, config: &CalculatorConfig) -> Vec<KeyValue> {
    let amount = |value| {
        format_amount(
            value,
            config.currency_precision,
            config.currency_code.as_deref(),
        )
    };
    let final_date = summary
        .final_payment_date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "-".to_string());

    vec![
        KeyValue::new("Rent", amount(summary.rent_total)),
        KeyValue::new("Service charges", amount(summary.service_charges_total)),
        KeyValue::new("One-time fees", amount(summary.fees_total)),
        KeyValue::new("Refundable deposit", amount(summary.deposit_total)),
        KeyValue::new("Grand total", amount(summary.grand_total)),
        KeyValue::new("Non-refundable total", amount(summary.non_refundable_total)),
        KeyValue::new("Payments", summary.payment_count.to_string()),
        KeyValue::new("Final payment", final_date),
    ]
}
