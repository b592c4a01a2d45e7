use super::money::Money;
use super::payment::PaymentMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order waiting to be priced.
///
/// The amount is kept raw so that non-positive amounts survive parsing and
/// are rejected by the calculator instead. It is parsed from its text so the
/// digits and scale of the input are kept exactly.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub order: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub first_order: bool,
    pub method: PaymentMethod,
}

/// The priced outcome of a single order.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Quote {
    pub order: u32,
    pub amount: Decimal,
    /// Combined discount rate that was applied.
    pub discount: Decimal,
    /// Discounted and taxed payment.
    pub total: Money,
    /// Delivery fee charged on `total`.
    pub delivery_fee: Money,
    pub amount_due: Money,
}
