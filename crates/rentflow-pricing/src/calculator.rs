//! Rental cost calculation.
//!
//! Computes the prorated first month, the amount due at signing and the next
//! recurring payment for a booking. Everything here is a pure function of its
//! inputs: no I/O, no caching, identical inputs give identical results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rentflow_config::CalculatorConfig;
use rentflow_core::{Date, Money, PaymentPlan, RentflowError, RentflowResult, RoundingMode};

// =============================================================================
// INPUTS
// =============================================================================

/// Booking parameters chosen in the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSelection {
    /// First day of occupancy and billing.
    pub move_in_date: Date,
    /// Length of the agreement in whole months, between 1 and `MAX_DURATION_MONTHS`.
    pub duration_months: u32,
    /// Billing cadence.
    pub payment_plan: PaymentPlan,
}

impl BookingSelection {
    /// Creates a selection from already-typed values.
    pub fn new(move_in_date: Date, duration_months: u32, payment_plan: PaymentPlan) -> Self {
        Self {
            move_in_date,
            duration_months,
            payment_plan,
        }
    }

    /// Parses raw form values.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an unparseable date, a duration below 1, or a plan
    /// other than `monthly`/`upfront`.
    pub fn parse(move_in_date: &str, duration_months: i64, payment_plan: &str) -> RentflowResult<Self> {
        let move_in_date = Date::parse(move_in_date).map_err(|e| e.with_field("move_in_date"))?;
        let duration_months = parse_duration(duration_months)?;
        let payment_plan = payment_plan.parse::<PaymentPlan>()?;
        Ok(Self::new(move_in_date, duration_months, payment_plan))
    }
}

/// Longest agreement accepted, in months.
pub const MAX_DURATION_MONTHS: u32 = 1200;

fn parse_duration(months: i64) -> RentflowResult<u32> {
    let months = u32::try_from(months).map_err(|_| duration_out_of_range(months))?;
    check_duration(months)?;
    Ok(months)
}

pub(crate) fn check_duration(months: u32) -> RentflowResult<()> {
    if (1..=MAX_DURATION_MONTHS).contains(&months) {
        Ok(())
    } else {
        Err(duration_out_of_range(i64::from(months)))
    }
}

fn duration_out_of_range(months: i64) -> RentflowError {
    RentflowError::invalid_argument(
        "duration_months",
        format!("must be between 1 and {MAX_DURATION_MONTHS}, got {months}"),
    )
}

/// Charge components and booking parameters for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCostInput {
    /// Base recurring rent.
    pub monthly_rent: Money,
    /// Returned at the end of tenancy, never amortized.
    pub refundable_deposit: Money,
    /// Non-refundable, charged once at move-in.
    pub one_time_fees: Money,
    /// Recurring utilities/services billed on top of rent.
    pub monthly_service_charges: Money,
    /// Move-in date, duration and plan.
    #[serde(flatten)]
    pub selection: BookingSelection,
}

impl RentalCostInput {
    /// Creates an input with no deposit, fees or service charges.
    pub fn new(monthly_rent: Money, selection: BookingSelection) -> Self {
        Self {
            monthly_rent,
            refundable_deposit: Money::ZERO,
            one_time_fees: Money::ZERO,
            monthly_service_charges: Money::ZERO,
            selection,
        }
    }

    /// Sets the refundable deposit.
    pub fn with_deposit(mut self, deposit: Money) -> Self {
        self.refundable_deposit = deposit;
        self
    }

    /// Sets the one-time fees.
    pub fn with_fees(mut self, fees: Money) -> Self {
        self.one_time_fees = fees;
        self
    }

    /// Sets the monthly service charges.
    pub fn with_service_charges(mut self, charges: Money) -> Self {
        self.monthly_service_charges = charges;
        self
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// How the first month was prorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Days in the calendar month containing the move-in date.
    pub days_in_month: u32,
    /// Move-in day through month end, inclusive.
    pub active_days: u32,
    /// `monthly_rent / days_in_month`, at currency precision.
    pub daily_rate: Money,
    /// Rent charged for the partial first month.
    pub prorated_first_month: Money,
    /// Rent for the months after the first, collected now under `upfront` only.
    pub remaining_months_cost: Money,
}

impl CostBreakdown {
    /// Returns true if the tenant moves in after the first of the month.
    pub fn is_partial_month(&self) -> bool {
        self.active_days < self.days_in_month
    }
}

/// Amounts shown to the tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    /// Base recurring rent.
    pub monthly_rent: Money,
    /// Refundable deposit.
    pub deposit: Money,
    /// One-time fees.
    pub fees: Money,
    /// Recurring service charges.
    pub monthly_service_charges: Money,
    /// Due at signing.
    pub total_move_in_cost: Money,
    /// Due on `next_payment_date`; zero under `upfront`.
    pub next_monthly_payment: Money,
    /// Portion of the move-in cost returned at tenancy end.
    pub refundable_at_move_in: Money,
    /// Portion of the move-in cost kept by the landlord.
    pub non_refundable_at_move_in: Money,
}

/// Full cost breakdown for a booking.
///
/// Derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalCostResult {
    /// Plan the costs were computed for.
    pub payment_plan: PaymentPlan,
    /// Move-in date the costs were computed for.
    pub move_in_date: Date,
    /// Agreement length in whole months.
    pub duration_months: u32,
    /// Proration details.
    pub breakdown: CostBreakdown,
    /// Amounts due.
    pub costs: CostSummary,
    /// First day of the month after the move-in month.
    pub next_payment_date: Date,
}

// =============================================================================
// CALCULATOR
// =============================================================================

/// Rental cost calculator.
///
/// Rounds every monetary output to the configured precision. The default is
/// two decimals, half-up.
///
/// # Example
///
/// ```rust
/// use rentflow_core::{Date, Money, PaymentPlan};
/// use rentflow_pricing::{BookingSelection, RentalCostCalculator, RentalCostInput};
/// use rust_decimal_macros::dec;
///
/// let selection = BookingSelection::new(
///     Date::parse("2024-01-16").unwrap(),
///     6,
///     PaymentPlan::Monthly,
/// );
/// let input = RentalCostInput::new(Money::try_new("rent", dec!(15000)).unwrap(), selection);
///
/// let result = RentalCostCalculator::new().calculate(&input).unwrap();
/// assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(7741.94));
/// assert_eq!(result.next_payment_date.to_string(), "2024-02-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalCostCalculator {
    precision: u32,
    rounding: RoundingMode,
}

impl Default for RentalCostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl RentalCostCalculator {
    /// Creates a calculator rounding half-up to two decimals.
    pub fn new() -> Self {
        Self {
            precision: 2,
            rounding: RoundingMode::HalfUp,
        }
    }

    /// Creates a calculator using the configured precision and rounding.
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            precision: config.currency_precision,
            rounding: config.rounding,
        }
    }

    /// Decimal places of every monetary output.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounding mode of every monetary output.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Computes the cost breakdown for `input`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `duration_months` is outside
    /// `1..=MAX_DURATION_MONTHS`, `ComputationOverflow`
    /// if an amount cannot be represented.
    pub fn calculate(&self, input: &RentalCostInput) -> RentflowResult<RentalCostResult> {
        match self.compute(input) {
            Ok(result) => {
                debug!(
                    plan = %result.payment_plan,
                    move_in = %result.move_in_date,
                    days_in_month = result.breakdown.days_in_month,
                    active_days = result.breakdown.active_days,
                    prorated = %result.breakdown.prorated_first_month,
                    total_move_in = %result.costs.total_move_in_cost,
                    next_payment = %result.costs.next_monthly_payment,
                    "computed rental costs"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "rental cost calculation rejected");
                Err(e)
            }
        }
    }

    fn compute(&self, input: &RentalCostInput) -> RentflowResult<RentalCostResult> {
        let selection = input.selection;
        check_duration(selection.duration_months)?;

        // Sub-precision input digits are not chargeable.
        let rent = self.round(input.monthly_rent);
        let deposit = self.round(input.refundable_deposit);
        let fees = self.round(input.one_time_fees);
        let service = self.round(input.monthly_service_charges);

        let move_in = selection.move_in_date;
        let days_in_month = move_in.days_in_month();
        let active_days = move_in.days_remaining_in_month();

        let daily_rate = self.round(rent.checked_div(days_in_month)?);
        let prorated =
            rent.prorate(active_days, days_in_month, self.precision, self.rounding)?;
        let next_payment_date = move_in.start_of_next_month()?;

        let (remaining_months_cost, next_monthly_payment) = match selection.payment_plan {
            PaymentPlan::Monthly => (Money::ZERO, rent.checked_add(service)?),
            PaymentPlan::Upfront => (
                rent.checked_mul(selection.duration_months - 1)?,
                Money::ZERO,
            ),
        };

        let non_refundable_at_move_in = prorated
            .checked_add(fees)?
            .checked_add(remaining_months_cost)?;
        let total_move_in_cost = non_refundable_at_move_in.checked_add(deposit)?;

        Ok(RentalCostResult {
            payment_plan: selection.payment_plan,
            move_in_date: move_in,
            duration_months: selection.duration_months,
            breakdown: CostBreakdown {
                days_in_month,
                active_days,
                daily_rate,
                prorated_first_month: prorated,
                remaining_months_cost,
            },
            costs: CostSummary {
                monthly_rent: rent,
                deposit,
                fees,
                monthly_service_charges: service,
                total_move_in_cost,
                next_monthly_payment,
                refundable_at_move_in: deposit,
                non_refundable_at_move_in,
            },
            next_payment_date,
        })
    }

    fn round(&self, amount: Money) -> Money {
        amount.round(self.precision, self.rounding)
    }
}

/// Computes rental costs from raw booking-form and pricing values.
///
/// Uses the default calculator (two decimals, half-up).
///
/// # Errors
///
/// `InvalidArgument` for a negative amount, an unparseable `move_in_date`,
/// `duration_months` outside `1..=MAX_DURATION_MONTHS`, or a plan other than
/// `monthly`/`upfront`.
/// `ComputationOverflow` if an amount cannot be represented.
///
/// # Example
///
/// ```rust
/// use rentflow_pricing::calculate_rental_costs;
/// use rust_decimal_macros::dec;
///
/// let result = calculate_rental_costs(
///     dec!(10000), dec!(10000), dec!(0), "2024-03-01", 3, "upfront", dec!(0),
/// )
/// .unwrap();
/// assert_eq!(result.costs.total_move_in_cost.amount(), dec!(40000));
///
/// assert!(calculate_rental_costs(
///     dec!(10000), dec!(0), dec!(0), "2024-03-01", 3, "biweekly", dec!(0),
/// )
/// .is_err());
/// ```
pub fn calculate_rental_costs(
    monthly_rent: Decimal,
    deposit: Decimal,
    one_time_fees: Decimal,
    move_in_date: &str,
    duration_months: i64,
    payment_plan: &str,
    monthly_service_charges: Decimal,
) -> RentflowResult<RentalCostResult> {
    let input = parse_input(
        monthly_rent,
        deposit,
        one_time_fees,
        move_in_date,
        duration_months,
        payment_plan,
        monthly_service_charges,
    )
    .map_err(|e| {
        warn!(error = %e, "rental cost calculation rejected");
        e
    })?;
    RentalCostCalculator::new().calculate(&input)
}

fn parse_input(
    monthly_rent: Decimal,
    deposit: Decimal,
    one_time_fees: Decimal,
    move_in_date: &str,
    duration_months: i64,
    payment_plan: &str,
    monthly_service_charges: Decimal,
) -> RentflowResult<RentalCostInput> {
    let selection = BookingSelection::parse(move_in_date, duration_months, payment_plan)?;
    Ok(RentalCostInput {
        monthly_rent: Money::try_new("monthly_rent", monthly_rent)?,
        refundable_deposit: Money::try_new("deposit", deposit)?,
        one_time_fees: Money::try_new("one_time_fees", one_time_fees)?,
        monthly_service_charges: Money::try_new("monthly_service_charges", monthly_service_charges)?,
        selection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(value: Decimal) -> Money {
        Money::try_new("test", value).unwrap()
    }

    fn input(rent: Decimal, move_in: &str, months: u32, plan: PaymentPlan) -> RentalCostInput {
        RentalCostInput::new(
            money(rent),
            BookingSelection::new(Date::parse(move_in).unwrap(), months, plan),
        )
    }

    #[test]
    fn test_full_month_is_not_prorated() {
        let result = RentalCostCalculator::new()
            .calculate(&input(dec!(12000), "2024-04-01", 2, PaymentPlan::Monthly))
            .unwrap();

        assert_eq!(result.breakdown.days_in_month, 30);
        assert_eq!(result.breakdown.active_days, 30);
        assert!(!result.breakdown.is_partial_month());
        assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(12000));
        assert_eq!(result.breakdown.daily_rate.amount(), dec!(400));
    }

    #[test]
    fn test_last_day_of_month_charges_one_day() {
        let result = RentalCostCalculator::new()
            .calculate(&input(dec!(3100), "2024-01-31", 3, PaymentPlan::Monthly))
            .unwrap();

        assert_eq!(result.breakdown.active_days, 1);
        assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(100));
        assert_eq!(result.next_payment_date, Date::from_ymd(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = RentalCostCalculator::new()
            .calculate(&input(dec!(1000), "2024-01-10", 0, PaymentPlan::Upfront))
            .unwrap_err();
        assert_eq!(err.field(), Some("duration_months"));
    }

    #[test]
    fn test_monthly_excludes_future_rent() {
        let inp = input(dec!(9000), "2024-06-11", 12, PaymentPlan::Monthly)
            .with_deposit(money(dec!(9000)))
            .with_fees(money(dec!(250)))
            .with_service_charges(money(dec!(300)));

        let result = RentalCostCalculator::new().calculate(&inp).unwrap();
        // 9000 * 20 / 30
        assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(6000));
        assert_eq!(result.breakdown.remaining_months_cost, Money::ZERO);
        assert_eq!(result.costs.total_move_in_cost.amount(), dec!(15250));
        assert_eq!(result.costs.non_refundable_at_move_in.amount(), dec!(6250));
        assert_eq!(result.costs.refundable_at_move_in.amount(), dec!(9000));
        assert_eq!(result.costs.next_monthly_payment.amount(), dec!(9300));
    }

    #[test]
    fn test_half_even_configuration() {
        let config = CalculatorConfig::new().with_rounding(RoundingMode::HalfEven);
        let calculator = RentalCostCalculator::with_config(&config);
        assert_eq!(calculator.rounding(), RoundingMode::HalfEven);

        // 0.5 * 1 / 2 = 0.25 -> 0.2 at one decimal, half-even
        let result = RentalCostCalculator::with_config(&config.clone().with_precision(1))
            .calculate(&input(dec!(0.5), "2024-04-16", 1, PaymentPlan::Monthly))
            .unwrap();
        assert_eq!(result.breakdown.active_days, 15);
        assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(0.2));

        let result = RentalCostCalculator::new()
            .calculate(&input(dec!(0.5), "2024-04-16", 1, PaymentPlan::Monthly))
            .unwrap();
        assert_eq!(result.breakdown.prorated_first_month.amount(), dec!(0.25));
    }

    #[test]
    fn test_inputs_rounded_to_precision() {
        let result = RentalCostCalculator::new()
            .calculate(
                &input(dec!(1000.005), "2024-04-01", 1, PaymentPlan::Monthly)
                    .with_deposit(money(dec!(0.004))),
            )
            .unwrap();
        assert_eq!(result.costs.monthly_rent.amount(), dec!(1000.01));
        assert_eq!(result.costs.deposit, Money::ZERO);
        assert_eq!(result.costs.total_move_in_cost.amount(), dec!(1000.01));
    }

    #[test]
    fn test_string_entry_point_validation() {
        let ok = calculate_rental_costs(
            dec!(1000),
            dec!(0),
            dec!(0),
            "2024-01-16",
            1,
            "MONTHLY",
            dec!(0),
        );
        assert!(ok.is_ok());

        let cases = [
            (dec!(-1), dec!(0), "2024-01-16", 1, "monthly", "monthly_rent"),
            (dec!(1), dec!(-1), "2024-01-16", 1, "monthly", "deposit"),
            (dec!(1), dec!(0), "2024-13-01", 1, "monthly", "move_in_date"),
            (dec!(1), dec!(0), "2024-01-16", 0, "monthly", "duration_months"),
            (dec!(1), dec!(0), "2024-01-16", -3, "monthly", "duration_months"),
            (dec!(1), dec!(0), "2024-01-16", 1, "weekly", "payment_plan"),
        ];
        for (rent, deposit, date, months, plan, field) in cases {
            let err = calculate_rental_costs(rent, deposit, dec!(0), date, months, plan, dec!(0))
                .unwrap_err();
            assert_eq!(err.field(), Some(field), "case {date} {months} {plan}");
        }
    }

    #[test]
    fn test_duration_cap() {
        let calculator = RentalCostCalculator::new();
        let longest = calculator
            .calculate(&input(dec!(1000), "2024-01-16", MAX_DURATION_MONTHS, PaymentPlan::Upfront))
            .unwrap();
        assert_eq!(
            longest.breakdown.remaining_months_cost.amount(),
            dec!(1000) * Decimal::from(MAX_DURATION_MONTHS - 1)
        );

        let err = calculator
            .calculate(&input(dec!(1000), "2024-01-16", MAX_DURATION_MONTHS + 1, PaymentPlan::Monthly))
            .unwrap_err();
        assert_eq!(err.field(), Some("duration_months"));

        for months in [4_000_000_000_i64, 5_000_000, i64::MAX] {
            let err = BookingSelection::parse("2024-01-16", months, "monthly").unwrap_err();
            assert_eq!(err.field(), Some("duration_months"), "{months}");
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = RentalCostCalculator::new().calculate(&input(
            Decimal::MAX,
            "2024-01-01",
            3,
            PaymentPlan::Upfront,
        ));
        assert!(matches!(
            result,
            Err(RentflowError::ComputationOverflow { .. })
        ));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = RentalCostCalculator::new()
            .calculate(&input(dec!(1000), "2024-01-16", 2, PaymentPlan::Monthly))
            .unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["nextPaymentDate"], "2024-02-01");
        assert_eq!(json["breakdown"]["activeDays"], 16);
        assert!(json["costs"]["totalMoveInCost"].is_number());
    }
}
