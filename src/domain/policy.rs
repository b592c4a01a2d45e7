use super::payment::PaymentMethod;
use crate::error::PricingError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const FIRST_ORDER_DISCOUNT: Decimal = dec!(0.10);
pub const TAX_RATE: Decimal = dec!(0.15);
pub const DELIVERY_THRESHOLD: Decimal = dec!(50.00);
pub const DELIVERY_FEE: Decimal = dec!(5.00);

/// Rates and limits the calculator prices orders with.
///
/// Every field falls back to its default when missing, so a policy file only
/// needs to list what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingPolicy {
    /// Discount applied to a customer's first order.
    pub first_order_discount: Decimal,
    /// Tax applied after all discounts.
    pub tax_rate: Decimal,
    /// Orders at or above this amount ship for free.
    pub delivery_threshold: Decimal,
    /// Flat fee charged below the threshold.
    pub delivery_fee: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            first_order_discount: FIRST_ORDER_DISCOUNT,
            tax_rate: TAX_RATE,
            delivery_threshold: DELIVERY_THRESHOLD,
            delivery_fee: DELIVERY_FEE,
        }
    }
}

impl PricingPolicy {
    /// The default policy with no tax applied.
    pub fn tax_free() -> Self {
        Self {
            tax_rate: Decimal::ZERO,
            ..Self::default()
        }
    }

    /// Rejects policies that could price an order below zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.first_order_discount < Decimal::ZERO || self.first_order_discount > Decimal::ONE {
            return Err(PricingError::Config(format!(
                "first_order_discount must be between 0 and 1, got {}",
                self.first_order_discount
            )));
        }
        let max_discount = self.first_order_discount + PaymentMethod::max_discount_rate();
        if max_discount > Decimal::ONE {
            return Err(PricingError::Config(format!(
                "combined discount can reach {max_discount}, which exceeds 1"
            )));
        }
        if self.tax_rate < Decimal::ZERO {
            return Err(PricingError::Config(format!(
                "tax_rate must not be negative, got {}",
                self.tax_rate
            )));
        }
        if self.delivery_fee < Decimal::ZERO {
            return Err(PricingError::Config(format!(
                "delivery_fee must not be negative, got {}",
                self.delivery_fee
            )));
        }
        Ok(())
    }
}
