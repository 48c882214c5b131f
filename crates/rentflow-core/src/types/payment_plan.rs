//! Payment plan selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RentflowError;

/// Billing cadence selected for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    /// Rent is charged incrementally, one billing period at a time.
    #[default]
    Monthly,
    /// The full agreed duration is charged at move-in.
    Upfront,
}

impl PaymentPlan {
    /// Returns the wire identifier for this plan.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::Monthly => "monthly",
            PaymentPlan::Upfront => "upfront",
        }
    }

    /// Returns true if further rent is billed after move-in.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        matches!(self, PaymentPlan::Monthly)
    }
}

impl fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentPlan {
    type Err = RentflowError;

    /// Parses `monthly` or `upfront`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PaymentPlan::Monthly),
            "upfront" => Ok(PaymentPlan::Upfront),
            _ => Err(RentflowError::invalid_argument(
                "payment_plan",
                format!("expected `monthly` or `upfront`, got {s:?}"),
            )),
        }
    }
}
