//! Dated charges for a tenancy agreement.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Date, Money};
use crate::error::RentflowResult;

/// Kind of charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Rent for the partial first month
    ProratedRent,
    /// Rent for a full month billed on its due date
    Rent,
    /// Rent for the remaining months, collected at move-in
    PrepaidRent,
    /// Recurring utilities/services
    ServiceCharge,
    /// Refundable security deposit
    Deposit,
    /// Non-refundable one-off fee (e.g. registration)
    OneTimeFee,
}

impl ChargeType {
    /// Returns true if the tenant gets this charge back at tenancy end.
    #[must_use]
    pub fn is_refundable(&self) -> bool {
        matches!(self, ChargeType::Deposit)
    }

    /// Returns true if this charge pays for occupancy.
    #[must_use]
    pub fn is_rent(&self) -> bool {
        matches!(
            self,
            ChargeType::ProratedRent | ChargeType::Rent | ChargeType::PrepaidRent
        )
    }
}

impl fmt::Display for ChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChargeType::ProratedRent => "Prorated Rent",
            ChargeType::Rent => "Rent",
            ChargeType::PrepaidRent => "Prepaid Rent",
            ChargeType::ServiceCharge => "Service Charge",
            ChargeType::Deposit => "Deposit",
            ChargeType::OneTimeFee => "One-Time Fee",
        };
        write!(f, "{name}")
    }
}

/// A single amount due from the tenant on a given date.
///
/// # Example
///
/// ```rust
/// use rentflow_core::types::{Charge, ChargeType, Date, Money};
/// use rust_decimal_macros::dec;
///
/// let charge = Charge::new(
///     Date::from_ymd(2024, 2, 1).unwrap(),
///     Money::try_new("rent", dec!(15000)).unwrap(),
///     ChargeType::Rent,
/// );
/// assert!(!charge.is_refundable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    date: Date,
    amount: Money,
    kind: ChargeType,
    /// Month covered by a rent or service charge, as its first day
    period_start: Option<Date>,
}

impl Charge {
    /// Creates a new charge.
    #[must_use]
    pub fn new(date: Date, amount: Money, kind: ChargeType) -> Self {
        Self {
            date,
            amount,
            kind,
            period_start: None,
        }
    }

    /// Sets the billing period this charge covers.
    #[must_use]
    pub fn with_period(mut self, period_start: Date) -> Self {
        self.period_start = Some(period_start);
        self
    }

    /// Returns the due date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the charge type.
    #[must_use]
    pub fn kind(&self) -> ChargeType {
        self.kind
    }

    /// Returns the first day of the covered billing period, if any.
    #[must_use]
    pub fn period_start(&self) -> Option<Date> {
        self.period_start
    }

    /// Returns true if the tenant gets this charge back.
    #[must_use]
    pub fn is_refundable(&self) -> bool {
        self.kind.is_refundable()
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.kind)
    }
}

/// An ordered list of charges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSchedule {
    charges: Vec<Charge>,
}

impl ChargeSchedule {
    /// Creates a new empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            charges: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            charges: Vec::with_capacity(capacity),
        }
    }

    /// Adds a charge. Zero amounts are dropped.
    pub fn push(&mut self, charge: Charge) {
        if !charge.amount.is_zero() {
            self.charges.push(charge);
        }
    }

    /// Returns the charges as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Charge] {
        &self.charges
    }

    /// Returns the number of charges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charges.len()
    }

    /// Returns true if there are no charges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Returns an iterator over the charges.
    pub fn iter(&self) -> impl Iterator<Item = &Charge> {
        self.charges.iter()
    }

    /// Sum of all charges.
    pub fn total(&self) -> RentflowResult<Money> {
        sum(self.charges.iter())
    }

    /// Sum of refundable charges.
    pub fn refundable_total(&self) -> RentflowResult<Money> {
        sum(self.charges.iter().filter(|c| c.is_refundable()))
    }

    /// Sum of charges of the given type.
    pub fn total_of(&self, kind: ChargeType) -> RentflowResult<Money> {
        sum(self.charges.iter().filter(|c| c.kind == kind))
    }

    /// Sum of everything due on `date`.
    pub fn due_on(&self, date: Date) -> RentflowResult<Money> {
        sum(self.charges.iter().filter(|c| c.date == date))
    }

    /// Distinct due dates, earliest first.
    #[must_use]
    pub fn due_dates(&self) -> Vec<Date> {
        let mut dates: Vec<Date> = self.charges.iter().map(|c| c.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Sorts charges by due date, keeping insertion order within a date.
    pub fn sort_by_date(&mut self) {
        self.charges.sort_by_key(|c| c.date);
    }

    /// Charges due strictly after `date`.
    #[must_use]
    pub fn after(&self, date: Date) -> Self {
        Self {
            charges: self
                .charges
                .iter()
                .filter(|c| c.date > date)
                .copied()
                .collect(),
        }
    }
}

fn sum<'a>(mut charges: impl Iterator<Item = &'a Charge>) -> RentflowResult<Money> {
    charges.try_fold(Money::ZERO, |acc, c| acc.checked_add(c.amount))
}

impl IntoIterator for ChargeSchedule {
    type Item = Charge;
    type IntoIter = std::vec::IntoIter<Charge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChargeSchedule {
    type Item = &'a Charge;
    type IntoIter = std::slice::Iter<'a, Charge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}

impl FromIterator<Charge> for ChargeSchedule {
    fn from_iter<I: IntoIterator<Item = Charge>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for charge in iter {
            schedule.push(charge);
        }
        schedule
    }
}
