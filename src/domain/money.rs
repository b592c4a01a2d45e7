use crate::error::PricingError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// Number of decimal places every settled monetary value carries.
pub const CENT_SCALE: u32 = 2;

/// Represents a strictly positive order amount.
///
/// Pricing only ever starts from an `Amount`, so a zero or negative order
/// cannot reach the discount and tax steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PricingError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PricingError::InvalidArgument(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// A monetary value settled at cent granularity.
///
/// Rounding is half-up (midpoint away from zero) and the value always keeps
/// exactly two decimal places, so `115` is rendered as `115.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Rounds `value` to the nearest cent.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        // round_dp never widens, so short values are padded back out to cents.
        rounded.rescale(CENT_SCALE);
        Self(rounded)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds two values, failing instead of overflowing.
    pub fn checked_add(self, rhs: Self) -> Result<Self, PricingError> {
        self.0
            .checked_add(rhs.0)
            .map(Self::from_decimal)
            .ok_or_else(|| PricingError::InvalidArgument("amount too large".to_string()))
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
