//! Domain types for rental cost calculations.
//!
//! This module provides type-safe representations of tenancy concepts:
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`Money`]: Non-negative monetary amount
//! - [`RoundingMode`]: Currency rounding policy
//! - [`PaymentPlan`]: Billing cadence (monthly or upfront)
//! - [`Charge`]: Dated charge due from the tenant
//! - [`ChargeSchedule`]: Ordered charges over an agreement

mod charge;
mod date;
mod money;
mod payment_plan;

pub use charge::{Charge, ChargeSchedule, ChargeType};
pub use date::Date;
pub use money::{Money, RoundingMode};
pub use payment_plan::PaymentPlan;
