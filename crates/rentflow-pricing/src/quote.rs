//! Adapter for the external pricing service payload.
//!
//! The booking page fetches a "comprehensive pricing" document for the chosen
//! room and passes its figures to the calculator. Amounts arrive as JSON
//! numbers and are validated here before any arithmetic happens.

use serde::{Deserialize, Serialize};

use rentflow_core::{Money, RentflowError, RentflowResult};

use crate::calculator::{BookingSelection, RentalCostInput};

/// Charge figures returned by the pricing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensivePricing {
    /// Base recurring rent.
    pub monthly_rent: f64,
    /// Recurring utilities/services.
    #[serde(default)]
    pub monthly_service_charges: f64,
    /// Refundable deposit.
    #[serde(default, alias = "deposit")]
    pub refundable_deposit: f64,
    /// Non-refundable move-in fees.
    #[serde(default, alias = "registrationFee")]
    pub one_time_fees: f64,
}

impl ComprehensivePricing {
    /// Parses a pricing payload.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on malformed JSON or a missing `monthlyRent`.
    pub fn from_json(payload: &str) -> RentflowResult<Self> {
        serde_json::from_str(payload)
            .map_err(|e| RentflowError::invalid_argument("pricing", e.to_string()))
    }

    /// Combines the payload with the booking form's choices.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first amount that is negative or not finite.
    pub fn to_input(&self, selection: BookingSelection) -> RentflowResult<RentalCostInput> {
        Ok(RentalCostInput {
            monthly_rent: Money::try_from_f64("monthly_rent", self.monthly_rent)?,
            refundable_deposit: Money::try_from_f64("deposit", self.refundable_deposit)?,
            one_time_fees: Money::try_from_f64("one_time_fees", self.one_time_fees)?,
            monthly_service_charges: Money::try_from_f64(
                "monthly_service_charges",
                self.monthly_service_charges,
            )?,
            selection,
        })
    }
}
