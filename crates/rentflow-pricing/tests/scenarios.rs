//! Booking scenarios checked against hand-computed figures.
//!
//! Each scenario mirrors what a tenant sees on the booking page for a given
//! room price, move-in date, duration and payment plan.

use rentflow_core::{Date, PaymentPlan, RentflowError};
use rentflow_pricing::{build_payment_schedule, calculate_rental_costs, RentalCostResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// Helper Functions
// ============================================================================

fn date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

#[allow(clippy::too_many_arguments)]
fn quote(
    rent: Decimal,
    deposit: Decimal,
    fees: Decimal,
    move_in: &str,
    months: i64,
    plan: &str,
    service: Decimal,
) -> RentalCostResult {
    calculate_rental_costs(rent, deposit, fees, move_in, months, plan, service)
        .unwrap_or_else(|e| panic!("{move_in} {months} {plan}: {e}"))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn monthly_plan_mid_month_move_in() {
    let result = quote(
        dec!(15000),
        dec!(15000),
        dec!(1000),
        "2024-01-16",
        6,
        "monthly",
        dec!(500),
    );

    assert_eq!(result.payment_plan, PaymentPlan::Monthly);
    assert_eq!(result.breakdown.days_in_month, 31);
    assert_eq!(result.breakdown.active_days, 16);
    assert_eq!(result.breakdown.daily_rate.amount(), dec!(483.87));
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(7741.94));
    assert_eq!(result.breakdown.remaining_months_cost.amount(), dec!(0));

    assert_eq!(result.costs.monthly_rent.amount(), dec!(15000));
    assert_eq!(result.costs.deposit.amount(), dec!(15000));
    assert_eq!(result.costs.fees.amount(), dec!(1000));
    assert_eq!(result.costs.monthly_service_charges.amount(), dec!(500));
    assert_eq!(result.costs.total_move_in_cost.amount(), dec!(23741.94));
    assert_eq!(result.costs.next_monthly_payment.amount(), dec!(15500));
    assert_eq!(result.next_payment_date, date("2024-02-01"));
}

#[test]
fn upfront_plan_first_of_month_move_in() {
    let result = quote(
        dec!(10000),
        dec!(10000),
        dec!(0),
        "2024-03-01",
        3,
        "upfront",
        dec!(0),
    );

    assert_eq!(result.breakdown.active_days, result.breakdown.days_in_month);
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(10000));
    assert_eq!(result.breakdown.remaining_months_cost.amount(), dec!(20000));
    assert_eq!(result.costs.total_move_in_cost.amount(), dec!(40000));
    assert_eq!(result.costs.next_monthly_payment.amount(), dec!(0));
    assert_eq!(result.next_payment_date, date("2024-04-01"));
}

#[test]
fn single_month_upfront_has_no_overcharge() {
    let result = quote(
        dec!(12000),
        dec!(6000),
        dec!(500),
        "2024-04-21",
        1,
        "upfront",
        dec!(300),
    );

    // 12000 * 10 / 30
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(4000));
    assert_eq!(result.breakdown.remaining_months_cost.amount(), dec!(0));
    assert_eq!(result.costs.total_move_in_cost.amount(), dec!(10500));
    assert_eq!(result.costs.next_monthly_payment.amount(), dec!(0));
}

#[test]
fn leap_year_february() {
    let leap = quote(dec!(2900), dec!(0), dec!(0), "2024-02-15", 2, "monthly", dec!(0));
    assert_eq!(leap.breakdown.days_in_month, 29);
    assert_eq!(leap.breakdown.active_days, 15);
    assert_eq!(leap.breakdown.prorated_first_month.amount(), dec!(1500));

    let common = quote(dec!(2800), dec!(0), dec!(0), "2023-02-15", 2, "monthly", dec!(0));
    assert_eq!(common.breakdown.days_in_month, 28);
    assert_eq!(common.breakdown.active_days, 14);
    assert_eq!(common.breakdown.prorated_first_month.amount(), dec!(1400));
    assert_eq!(common.next_payment_date, date("2023-03-01"));
}

#[test]
fn last_day_of_month_charges_one_day() {
    let result = quote(dec!(9300), dec!(0), dec!(0), "2024-12-31", 12, "monthly", dec!(0));
    assert_eq!(result.breakdown.active_days, 1);
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(300));
    assert_eq!(result.next_payment_date, date("2025-01-01"));
}

#[test]
fn half_up_rounding_of_proration() {
    // 100 * 5 / 31 = 16.129...
    let result = quote(dec!(100), dec!(0), dec!(0), "2024-03-27", 1, "monthly", dec!(0));
    assert_eq!(result.breakdown.active_days, 5);
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(16.13));

    // 0.01 * 15 / 30 = 0.005, a true midpoint
    let result = quote(dec!(0.01), dec!(0), dec!(0), "2024-04-16", 1, "monthly", dec!(0));
    assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(0.01));
}

#[test]
fn schedule_agrees_with_move_in_disclosure() {
    for plan in ["monthly", "upfront"] {
        let result = quote(
            dec!(15000),
            dec!(15000),
            dec!(1000),
            "2024-01-16",
            6,
            plan,
            dec!(500),
        );
        let schedule = build_payment_schedule(&result).unwrap();
        assert_eq!(
            schedule.due_on(result.move_in_date).unwrap(),
            result.costs.total_move_in_cost,
            "plan {plan}"
        );
    }
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn invalid_inputs_are_rejected() {
    let negative_rent = calculate_rental_costs(
        dec!(-15000),
        dec!(0),
        dec!(0),
        "2024-01-16",
        6,
        "monthly",
        dec!(0),
    );
    let zero_duration = calculate_rental_costs(
        dec!(15000),
        dec!(0),
        dec!(0),
        "2024-01-16",
        0,
        "monthly",
        dec!(0),
    );
    let biweekly = calculate_rental_costs(
        dec!(15000),
        dec!(0),
        dec!(0),
        "2024-01-16",
        6,
        "biweekly",
        dec!(0),
    );
    let bad_date = calculate_rental_costs(
        dec!(15000),
        dec!(0),
        dec!(0),
        "16/01/2024",
        6,
        "monthly",
        dec!(0),
    );
    let negative_service = calculate_rental_costs(
        dec!(15000),
        dec!(0),
        dec!(0),
        "2024-01-16",
        6,
        "monthly",
        dec!(-0.5),
    );

    for (name, outcome) in [
        ("negative rent", negative_rent),
        ("zero duration", zero_duration),
        ("biweekly", biweekly),
        ("bad date", bad_date),
        ("negative service", negative_service),
    ] {
        assert!(
            matches!(outcome, Err(RentflowError::InvalidArgument { .. })),
            "{name} should be rejected, got {outcome:?}"
        );
    }
}
