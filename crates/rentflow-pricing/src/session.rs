//! Recompute-on-change quote state for the booking page.
//!
//! A [`QuoteSession`] holds whatever the booking page currently knows: the
//! pricing payload (once fetched) and the form values. Every setter recomputes
//! from scratch and replaces the previous [`PricingState`].

use std::fmt;

use tracing::debug;

use rentflow_config::CalculatorConfig;
use rentflow_core::{Date, PaymentPlan, RentflowError};

use crate::calculator::{BookingSelection, RentalCostCalculator, RentalCostResult};
use crate::quote::ComprehensivePricing;

/// What the pricing panel should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PricingState {
    /// Pricing has not been fetched or no move-in date is chosen yet.
    #[default]
    NotLoaded,
    /// A breakdown is available.
    Ready(Box<RentalCostResult>),
    /// The inputs cannot be priced.
    Unavailable(RentflowError),
}

impl PricingState {
    /// Returns the breakdown, if ready.
    pub fn result(&self) -> Option<&RentalCostResult> {
        match self {
            PricingState::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the failure, if unavailable.
    pub fn error(&self) -> Option<&RentflowError> {
        match self {
            PricingState::Unavailable(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if a breakdown is available.
    pub fn is_ready(&self) -> bool {
        matches!(self, PricingState::Ready(_))
    }
}

impl fmt::Display for PricingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingState::NotLoaded => write!(f, "Pricing not loaded"),
            PricingState::Ready(result) => write!(
                f,
                "Due at move-in: {}",
                result.costs.total_move_in_cost
            ),
            PricingState::Unavailable(err) => write!(f, "Unable to calculate pricing: {err}"),
        }
    }
}

/// Booking-page pricing state that recomputes on every input change.
///
/// # Example
///
/// ```rust
/// use rentflow_pricing::{ComprehensivePricing, PricingState, QuoteSession};
///
/// let mut session = QuoteSession::new();
/// assert_eq!(session.state(), &PricingState::NotLoaded);
///
/// session.set_move_in_date("2024-01-16");
/// session.set_duration_months(6);
/// session.set_pricing_json(r#"{"monthlyRent": 15000, "deposit": 15000}"#);
/// assert!(session.state().is_ready());
///
/// session.set_duration_months(0);
/// assert!(session.state().error().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct QuoteSession {
    calculator: RentalCostCalculator,
    pricing: Option<Result<ComprehensivePricing, RentflowError>>,
    move_in_date: Option<String>,
    duration_months: i64,
    payment_plan: String,
    state: PricingState,
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSession {
    /// Creates an empty session: one month, monthly plan, nothing loaded.
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates an empty session using `config` for rounding and the default plan.
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            calculator: RentalCostCalculator::with_config(config),
            pricing: None,
            move_in_date: None,
            duration_months: 1,
            payment_plan: config.default_payment_plan.as_str().to_string(),
            state: PricingState::NotLoaded,
        }
    }

    /// Current pricing state.
    pub fn state(&self) -> &PricingState {
        &self.state
    }

    /// Stores a fetched pricing payload.
    pub fn set_pricing(&mut self, pricing: ComprehensivePricing) -> &PricingState {
        self.pricing = Some(Ok(pricing));
        self.recompute()
    }

    /// Parses and stores a raw pricing response body.
    pub fn set_pricing_json(&mut self, payload: &str) -> &PricingState {
        self.pricing = Some(ComprehensivePricing::from_json(payload));
        self.recompute()
    }

    /// Sets the move-in date from the form's `YYYY-MM-DD` value.
    pub fn set_move_in_date(&mut self, date: &str) -> &PricingState {
        self.move_in_date = Some(date.to_string());
        self.recompute()
    }

    /// Sets the move-in date from a typed date.
    pub fn set_move_in(&mut self, date: Date) -> &PricingState {
        self.set_move_in_date(&date.to_string())
    }

    /// Sets the agreement length.
    pub fn set_duration_months(&mut self, months: i64) -> &PricingState {
        self.duration_months = months;
        self.recompute()
    }

    /// Sets the payment plan from the form's raw value.
    pub fn set_payment_plan(&mut self, plan: &str) -> &PricingState {
        self.payment_plan = plan.to_string();
        self.recompute()
    }

    /// Sets the payment plan from a typed value.
    pub fn set_plan(&mut self, plan: PaymentPlan) -> &PricingState {
        self.set_payment_plan(plan.as_str())
    }

    /// Forgets the pricing payload, e.g. when another room is selected.
    pub fn clear_pricing(&mut self) -> &PricingState {
        self.pricing = None;
        self.recompute()
    }

    fn recompute(&mut self) -> &PricingState {
        self.state = self.evaluate();
        debug!(state = %self.state, "pricing state recomputed");
        &self.state
    }

    fn evaluate(&self) -> PricingState {
        let (Some(pricing), Some(move_in_date)) = (&self.pricing, &self.move_in_date) else {
            return PricingState::NotLoaded;
        };
        let pricing = match pricing {
            Ok(pricing) => pricing,
            Err(err) => return PricingState::Unavailable(err.clone()),
        };

        let computed = BookingSelection::parse(move_in_date, self.duration_months, &self.payment_plan)
            .and_then(|selection| pricing.to_input(selection))
            .and_then(|input| self.calculator.calculate(&input));

        match computed {
            Ok(result) => PricingState::Ready(Box::new(result)),
            Err(err) => PricingState::Unavailable(err),
        }
    }
}
