//! Payment schedules over the whole agreement.
//!
//! Expands a [`RentalCostResult`] into every dated charge the tenant will pay,
//! so the booking page can show a recurring-billing preview next to the
//! move-in disclosure.

use serde::{Deserialize, Serialize};

use rentflow_core::types::{Charge, ChargeSchedule, ChargeType};
use rentflow_core::{Date, Money, PaymentPlan, RentflowResult};

use crate::calculator::{check_duration, RentalCostResult};

/// Builds the dated charges for a computed booking.
///
/// Move-in date: prorated rent, deposit and fees, plus the prepaid remaining
/// months under `upfront`. Under `monthly`, `duration_months - 1` installments
/// of rent and service charges follow on the first of each month starting at
/// `next_payment_date`. Zero amounts are omitted.
///
/// The charges due on the move-in date always sum to `total_move_in_cost`.
///
/// # Errors
///
/// `InvalidArgument` on `duration_months` if it is outside
/// `1..=MAX_DURATION_MONTHS` or an installment date is not representable.
pub fn build_payment_schedule(result: &RentalCostResult) -> RentflowResult<ChargeSchedule> {
    check_duration(result.duration_months)?;
    let move_in = result.move_in_date;
    let costs = &result.costs;
    let installments = match result.payment_plan {
        PaymentPlan::Monthly => result.duration_months - 1,
        PaymentPlan::Upfront => 0,
    };

    let mut schedule = ChargeSchedule::with_capacity(4 + 2 * installments as usize);
    schedule.push(
        Charge::new(
            move_in,
            result.breakdown.prorated_first_month,
            ChargeType::ProratedRent,
        )
        .with_period(move_in.start_of_month()),
    );
    schedule.push(Charge::new(move_in, costs.deposit, ChargeType::Deposit));
    schedule.push(Charge::new(move_in, costs.fees, ChargeType::OneTimeFee));
    schedule.push(Charge::new(
        move_in,
        result.breakdown.remaining_months_cost,
        ChargeType::PrepaidRent,
    ));

    for month in 0..installments {
        let due = result
            .next_payment_date
            .add_months(month)
            .map_err(|e| e.with_field("duration_months"))?;
        schedule.push(Charge::new(due, costs.monthly_rent, ChargeType::Rent).with_period(due));
        schedule.push(
            Charge::new(due, costs.monthly_service_charges, ChargeType::ServiceCharge)
                .with_period(due),
        );
    }

    Ok(schedule)
}

/// Totals over a payment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    /// All rent, prorated and prepaid included.
    pub rent_total: Money,
    /// All service charges.
    pub service_charges_total: Money,
    /// All one-time fees.
    pub fees_total: Money,
    /// Refundable deposit.
    pub deposit_total: Money,
    /// Everything the tenant pays.
    pub grand_total: Money,
    /// `grand_total` minus the refundable deposit.
    pub non_refundable_total: Money,
    /// Number of distinct due dates.
    pub payment_count: usize,
    /// Last due date, if any charge exists.
    pub final_payment_date: Option<Date>,
}

/// Summarizes a schedule built by [`build_payment_schedule`].
pub fn contract_summary(schedule: &ChargeSchedule) -> RentflowResult<ContractSummary> {
    let rent_total = schedule
        .total_of(ChargeType::ProratedRent)?
        .checked_add(schedule.total_of(ChargeType::PrepaidRent)?)?
        .checked_add(schedule.total_of(ChargeType::Rent)?)?;
    let grand_total = schedule.total()?;
    let deposit_total = schedule.refundable_total()?;

    Ok(ContractSummary {
        rent_total,
        service_charges_total: schedule.total_of(ChargeType::ServiceCharge)?,
        fees_total: schedule.total_of(ChargeType::OneTimeFee)?,
        deposit_total,
        grand_total,
        non_refundable_total: grand_total.checked_sub(deposit_total)?,
        payment_count: schedule.due_dates().len(),
        final_payment_date: schedule.iter().map(Charge::date).max(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_rental_costs;
    use rust_decimal_macros::dec;

    #[test]
    fn test_longest_agreement() {
        let result = calculate_rental_costs(
            dec!(1000),
            dec!(0),
            dec!(0),
            "2024-01-16",
            i64::from(crate::calculator::MAX_DURATION_MONTHS),
            "monthly",
            dec!(0),
        )
        .unwrap();
        let schedule = build_payment_schedule(&result).unwrap();

        assert_eq!(schedule.len(), 1200);
        assert_eq!(
            schedule.due_dates().last().copied(),
            Some(Date::from_ymd(2123, 12, 1).unwrap())
        );
    }

    #[test]
    fn test_unbounded_duration_rejected() {
        let mut result =
            calculate_rental_costs(dec!(1000), dec!(0), dec!(0), "2024-01-16", 2, "monthly", dec!(0))
                .unwrap();
        for months in [0, 1201, 5_000_000, u32::MAX] {
            result.duration_months = months;
            let err = build_payment_schedule(&result).unwrap_err();
            assert_eq!(err.field(), Some("duration_months"), "{months}");
        }
    }

    #[test]
    fn test_monthly_schedule() {
        let result = calculate_rental_costs(
            dec!(15000),
            dec!(15000),
            dec!(1000),
            "2024-01-16",
            6,
            "monthly",
            dec!(500),
        )
        .unwrap();
        let schedule = build_payment_schedule(&result).unwrap();

        let move_in = result.move_in_date;
        assert_eq!(schedule.due_on(move_in).unwrap(), result.costs.total_move_in_cost);

        let dates = schedule.due_dates();
        assert_eq!(dates.len(), 6);
        assert_eq!(dates[1], Date::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(dates[5], Date::from_ymd(2024, 6, 1).unwrap());
        assert_eq!(
            schedule.due_on(dates[1]).unwrap(),
            result.costs.next_monthly_payment
        );

        let summary = contract_summary(&schedule).unwrap();
        // 7741.94 + 5 * 15000
        assert_eq!(summary.rent_total.amount(), dec!(82741.94));
        assert_eq!(summary.service_charges_total.amount(), dec!(2500));
        assert_eq!(summary.fees_total.amount(), dec!(1000));
        assert_eq!(summary.deposit_total.amount(), dec!(15000));
        assert_eq!(summary.grand_total.amount(), dec!(101241.94));
        assert_eq!(summary.non_refundable_total.amount(), dec!(86241.94));
        assert_eq!(summary.payment_count, 6);
        assert_eq!(summary.final_payment_date, Some(dates[5]));
    }

    #[test]
    fn test_upfront_schedule_is_single_payment() {
        let result = calculate_rental_costs(
            dec!(10000),
            dec!(10000),
            dec!(0),
            "2024-03-01",
            3,
            "upfront",
            dec!(750),
        )
        .unwrap();
        let schedule = build_payment_schedule(&result).unwrap();

        assert_eq!(schedule.due_dates(), vec![result.move_in_date]);
        // fees are zero and dropped
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.total().unwrap().amount(), dec!(40000));
        assert_eq!(
            schedule.total_of(ChargeType::PrepaidRent).unwrap().amount(),
            dec!(20000)
        );
        assert!(schedule.after(result.move_in_date).is_empty());
    }

    #[test]
    fn test_single_month_monthly_has_no_installments() {
        let result = calculate_rental_costs(
            dec!(3000),
            dec!(0),
            dec!(0),
            "2024-09-10",
            1,
            "monthly",
            dec!(100),
        )
        .unwrap();
        let schedule = build_payment_schedule(&result).unwrap();
        let summary = contract_summary(&schedule).unwrap();

        assert_eq!(summary.payment_count, 1);
        assert_eq!(summary.service_charges_total, Money::ZERO);
        // 3000 * 21 / 30
        assert_eq!(summary.grand_total.amount(), dec!(2100));
    }

    #[test]
    fn test_installments_stay_on_first_of_month() {
        let result = calculate_rental_costs(
            dec!(1000),
            dec!(0),
            dec!(0),
            "2024-11-30",
            4,
            "monthly",
            dec!(0),
        )
        .unwrap();
        let schedule = build_payment_schedule(&result).unwrap();
        let later: Vec<Date> = schedule.after(result.move_in_date).iter().map(Charge::date).collect();
        assert_eq!(
            later,
            vec![
                Date::from_ymd(2024, 12, 1).unwrap(),
                Date::from_ymd(2025, 1, 1).unwrap(),
                Date::from_ymd(2025, 2, 1).unwrap(),
            ]
        );
    }
}
