//! Monetary amounts and currency rounding.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RentflowError, RentflowResult};

/// Currency rounding policy.
///
/// Applied uniformly to every monetary output of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero (2.345 -> 2.35).
    #[default]
    HalfUp,
    /// Banker's rounding, half to even (2.345 -> 2.34).
    HalfEven,
}

impl RoundingMode {
    /// Rounds `value` to `decimal_places` using this mode.
    #[must_use]
    pub fn round(self, value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, self.strategy())
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Returns the configuration identifier for this mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfEven => "half_even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-negative monetary amount.
///
/// Currency agnostic: amounts are plain decimals in the booking's currency.
/// Construction rejects negative values, so every `Money` in a result is
/// guaranteed to be `>= 0`.
///
/// # Example
///
/// ```rust
/// use rentflow_core::types::{Money, RoundingMode};
/// use rust_decimal_macros::dec;
///
/// let rent = Money::try_new("monthly_rent", dec!(15000)).unwrap();
/// let prorated = rent.prorate(16, 31, 2, RoundingMode::HalfUp).unwrap();
/// assert_eq!(prorated.amount(), dec!(7741.94));
///
/// assert!(Money::try_new("deposit", dec!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates an amount, rejecting negative values.
    ///
    /// `field` names the input in the resulting error.
    pub fn try_new(field: &str, amount: Decimal) -> RentflowResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(RentflowError::invalid_argument(
                field,
                format!("must be non-negative, got {amount}"),
            ));
        }
        Ok(Money(amount))
    }

    /// Creates an amount from a float, rejecting NaN, infinities and negatives.
    pub fn try_from_f64(field: &str, amount: f64) -> RentflowResult<Self> {
        if !amount.is_finite() {
            return Err(RentflowError::invalid_argument(
                field,
                format!("must be a finite number, got {amount}"),
            ));
        }
        let value = Decimal::from_f64(amount).ok_or_else(|| {
            RentflowError::invalid_argument(field, format!("{amount} is out of range"))
        })?;
        Self::try_new(field, value)
    }

    /// Returns the decimal amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds to `decimal_places` using `mode`.
    #[must_use]
    pub fn round(&self, decimal_places: u32, mode: RoundingMode) -> Self {
        Money(mode.round(self.0, decimal_places))
    }

    /// Adds two amounts.
    pub fn checked_add(self, other: Money) -> RentflowResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| RentflowError::overflow("money addition"))
    }

    /// Subtracts `other`, failing if the result would be negative.
    pub fn checked_sub(self, other: Money) -> RentflowResult<Self> {
        match self.0.checked_sub(other.0) {
            Some(value) if !value.is_sign_negative() || value.is_zero() => Ok(Money(value)),
            _ => Err(RentflowError::overflow("money subtraction")),
        }
    }

    /// Multiplies by a whole count (e.g. months).
    pub fn checked_mul(self, count: u32) -> RentflowResult<Self> {
        self.0
            .checked_mul(Decimal::from(count))
            .map(Money)
            .ok_or_else(|| RentflowError::overflow("money multiplication"))
    }

    /// Divides by a whole count without rounding.
    pub fn checked_div(self, count: u32) -> RentflowResult<Self> {
        if count == 0 {
            return Err(RentflowError::overflow("division by zero"));
        }
        self.0
            .checked_div(Decimal::from(count))
            .map(Money)
            .ok_or_else(|| RentflowError::overflow("money division"))
    }

    /// Returns `self * days / of_days`, rounded.
    ///
    /// Multiplies before dividing so that a full period (`days == of_days`)
    /// reproduces the original amount exactly.
    pub fn prorate(
        self,
        days: u32,
        of_days: u32,
        decimal_places: u32,
        mode: RoundingMode,
    ) -> RentflowResult<Self> {
        if of_days == 0 {
            return Err(RentflowError::overflow("proration over a zero-day period"));
        }
        let scaled = self
            .0
            .checked_mul(Decimal::from(days))
            .ok_or_else(|| RentflowError::overflow("proration"))?;
        let value = scaled
            .checked_div(Decimal::from(of_days))
            .ok_or_else(|| RentflowError::overflow("proration"))?;
        Ok(Money(mode.round(value, decimal_places)))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = RentflowError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::try_new("amount", value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

/// Shows at least two decimals and never drops digits of the amount's scale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.0.scale().max(2) as usize;
        write!(f, "{:.scale$}", self.0)
    }
}
