//! # Rentflow Pricing
//!
//! Rental cost proration and payment-plan calculation for the booking portal.
//!
//! Given a monthly rent, one-time fees, a refundable deposit, recurring service
//! charges, a move-in date, a duration in whole months and a payment plan, the
//! calculator produces:
//!
//! - the prorated first month (move-in day through month end, inclusive)
//! - the total due at signing, which differs by plan
//! - the next recurring payment and its due date (first of the following month)
//!
//! ## Payment plans
//!
//! | Plan | Due at signing | Next payment |
//! |------|----------------|--------------|
//! | `monthly` | prorated rent + deposit + fees | rent + service charges |
//! | `upfront` | prorated rent + deposit + fees + rent × (months − 1) | nothing |
//!
//! ## Example
//!
//! ```rust
//! use rentflow_pricing::calculate_rental_costs;
//! use rust_decimal_macros::dec;
//!
//! let result = calculate_rental_costs(
//!     dec!(15000),   // monthly rent
//!     dec!(15000),   // refundable deposit
//!     dec!(1000),    // one-time fees
//!     "2024-01-16",  // move-in date
//!     6,             // months
//!     "monthly",     // payment plan
//!     dec!(500),     // monthly service charges
//! )
//! .unwrap();
//!
//! assert_eq!(result.breakdown.days_in_month, 31);
//! assert_eq!(result.breakdown.active_days, 16);
//! assert_eq!(result.costs.total_move_in_cost.amount(), dec!(23741.94));
//! assert_eq!(result.costs.next_monthly_payment.amount(), dec!(15500));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod calculator;
pub mod quote;
pub mod schedule;
pub mod session;

pub use calculator::{
    calculate_rental_costs, BookingSelection, CostBreakdown, CostSummary, RentalCostCalculator,
    RentalCostInput, RentalCostResult, MAX_DURATION_MONTHS,
};
pub use quote::ComprehensivePricing;
pub use schedule::{build_payment_schedule, contract_summary, ContractSummary};
pub use session::{PricingState, QuoteSession};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        calculate_rental_costs, BookingSelection, RentalCostCalculator, RentalCostInput,
        RentalCostResult,
    };
    pub use crate::schedule::{build_payment_schedule, contract_summary};
    pub use crate::session::{PricingState, QuoteSession};
    pub use rentflow_core::prelude::*;
}
