use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer settles an order. Each method carries a fixed discount.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PaymentMethod {
    #[serde(rename = "credit_card", alias = "credit-card", alias = "creditcard")]
    CreditCard,
    #[serde(rename = "paypal", alias = "pay_pal")]
    PayPal,
    #[serde(rename = "cash")]
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::CreditCard, Self::PayPal, Self::Cash];

    /// Discount rate granted for paying with this method.
    pub fn discount_rate(self) -> Decimal {
        match self {
            Self::CreditCard => dec!(0.05),
            Self::PayPal => dec!(0.02),
            Self::Cash => Decimal::ZERO,
        }
    }

    /// Largest discount any method grants.
    pub fn max_discount_rate() -> Decimal {
        Self::ALL
            .iter()
            .map(|method| method.discount_rate())
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreditCard => "credit_card",
            Self::PayPal => "paypal",
            Self::Cash => "cash",
        };
        f.write_str(name)
    }
}
