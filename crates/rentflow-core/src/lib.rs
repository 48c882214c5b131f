//! # Rentflow Core
//!
//! Core types and error handling for the Rentflow rental cost calculator.
//!
//! This crate provides the foundational building blocks used throughout Rentflow:
//!
//! - **Types**: Domain-specific types like `Date`, `Money`, `PaymentPlan`
//! - **Charges**: Dated charges and schedules for a tenancy agreement
//! - **Rounding**: Currency rounding modes applied to every monetary output
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: `Money` can never hold a negative amount
//! - **Fail Fast**: Invalid inputs are rejected with `RentflowError::InvalidArgument`
//! - **Exact Arithmetic**: All amounts use `rust_decimal`, never binary floats
//!
//! ## Example
//!
//! ```rust
//! use rentflow_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rent = Money::try_new("monthly_rent", dec!(15000)).unwrap();
//! let move_in = Date::parse("2024-01-16").unwrap();
//! assert_eq!(move_in.days_in_month(), 31);
//! assert_eq!(rent.amount(), dec!(15000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RentflowError, RentflowResult};
    pub use crate::types::{
        Charge, ChargeSchedule, ChargeType, Date, Money, PaymentPlan, RoundingMode,
    };
}

// Re-export commonly used types at crate root
pub use error::{RentflowError, RentflowResult};
pub use types::{Charge, ChargeSchedule, ChargeType, Date, Money, PaymentPlan, RoundingMode};
