use crate::domain::money::{Amount, Money};
use crate::domain::order::{Order, Quote};
use crate::domain::payment::PaymentMethod;
use crate::domain::policy::PricingPolicy;
use crate::error::{PricingError, Result};
use rust_decimal::Decimal;

/// Prices orders according to a `PricingPolicy`.
///
/// `PricingCalculator` is a plain value: every operation is a pure function of
/// its inputs and the policy, so a single instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PricingCalculator {
    policy: PricingPolicy,
}

impl PricingCalculator {
    /// Creates a calculator for the given policy.
    ///
    /// The policy is expected to have passed `PricingPolicy::validate`.
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    /// Combined discount rate for a first-order flag and payment method.
    pub fn discount_rate(&self, is_first_order: bool, method: PaymentMethod) -> Decimal {
        let first_order = if is_first_order {
            self.policy.first_order_discount
        } else {
            Decimal::ZERO
        };
        first_order + method.discount_rate()
    }

    /// Applies the discounts, then tax, and rounds the result to the cent.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` when `amount` is zero or negative,
    /// or so large that the taxed total no longer fits in a `Decimal`.
    pub fn process_payment(
        &self,
        amount: Decimal,
        is_first_order: bool,
        method: PaymentMethod,
    ) -> Result<Money> {
        let amount = Amount::new(amount)?;
        let discount = self.discount_rate(is_first_order, method);

        let taxed = Decimal::ONE
            .checked_add(self.policy.tax_rate)
            .and_then(|tax_factor| {
                amount
                    .value()
                    .checked_mul(Decimal::ONE - discount)?
                    .checked_mul(tax_factor)
            })
            .ok_or_else(|| PricingError::InvalidArgument("amount too large".to_string()))?;

        Ok(Money::from_decimal(taxed))
    }

    /// Flat delivery fee for an amount. Accepts any amount, including zero
    /// and negatives.
    pub fn calculate_delivery_fee(&self, amount: Decimal) -> Money {
        if amount < self.policy.delivery_threshold {
            Money::from_decimal(self.policy.delivery_fee)
        } else {
            Money::from_decimal(Decimal::ZERO)
        }
    }

    /// Prices an order and charges delivery on the processed total.
    pub fn quote(&self, order: &Order) -> Result<Quote> {
        let total = self.process_payment(order.amount, order.first_order, order.method)?;
        let delivery_fee = self.calculate_delivery_fee(total.value());

        Ok(Quote {
            order: order.order,
            amount: order.amount,
            discount: self.discount_rate(order.first_order, order.method),
            total,
            delivery_fee,
            amount_due: total.checked_add(delivery_fee)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(amount: Decimal, first_order: bool, method: PaymentMethod) -> Order {
        Order {
            order: 1,
            amount,
            first_order,
            method,
        }
    }

    #[test]
    fn test_discount_rate_combines_components() {
        let calculator = PricingCalculator::default();
        assert_eq!(
            calculator.discount_rate(true, PaymentMethod::CreditCard),
            dec!(0.15)
        );
        assert_eq!(
            calculator.discount_rate(true, PaymentMethod::PayPal),
            dec!(0.12)
        );
        assert_eq!(
            calculator.discount_rate(false, PaymentMethod::Cash),
            dec!(0)
        );
    }

    #[test]
    fn test_process_payment_applies_discount_then_tax() {
        let calculator = PricingCalculator::default();
        let total = calculator
            .process_payment(dec!(100.0), true, PaymentMethod::CreditCard)
            .unwrap();
        // 100 * 0.85 * 1.15
        assert_eq!(total.value(), dec!(97.75));
        assert_eq!(total.to_string(), "97.75");
    }

    #[test]
    fn test_process_payment_rounds_to_cents() {
        let calculator = PricingCalculator::default();
        let total = calculator
            .process_payment(dec!(33.33), true, PaymentMethod::CreditCard)
            .unwrap();
        // 33.33 * 0.85 * 1.15 = 32.580075
        assert_eq!(total.to_string(), "32.58");
    }

    #[test]
    fn test_process_payment_rejects_non_positive_amounts() {
        let calculator = PricingCalculator::default();
        assert!(matches!(
            calculator.process_payment(dec!(0.0), true, PaymentMethod::CreditCard),
            Err(PricingError::InvalidArgument(_))
        ));
        assert!(matches!(
            calculator.process_payment(dec!(-50.0), false, PaymentMethod::PayPal),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_process_payment_rejects_overflowing_amounts() {
        let calculator = PricingCalculator::default();
        for amount in [Decimal::MAX, dec!(70000000000000000000000000000)] {
            assert!(matches!(
                calculator.process_payment(amount, false, PaymentMethod::Cash),
                Err(PricingError::InvalidArgument(_))
            ));
        }

        // Discounts bring the total back under the limit.
        let total = calculator
            .process_payment(
                dec!(60000000000000000000000000000),
                true,
                PaymentMethod::CreditCard,
            )
            .unwrap();
        assert_eq!(total.value(), dec!(58650000000000000000000000000));
    }

    #[test]
    fn test_delivery_fee_threshold() {
        let calculator = PricingCalculator::default();
        assert_eq!(calculator.calculate_delivery_fee(dec!(49.99)).value(), dec!(5));
        assert_eq!(calculator.calculate_delivery_fee(dec!(50.0)).value(), dec!(0));
        assert_eq!(calculator.calculate_delivery_fee(dec!(-1)).value(), dec!(5));
    }

    #[test]
    fn test_quote_charges_delivery_on_processed_total() {
        let calculator = PricingCalculator::default();

        // 45.00 taxed is 51.75, which clears the threshold.
        let quote = calculator
            .quote(&order(dec!(45.0), false, PaymentMethod::Cash))
            .unwrap();
        assert_eq!(quote.total.to_string(), "51.75");
        assert_eq!(quote.delivery_fee.to_string(), "0.00");
        assert_eq!(quote.amount_due.to_string(), "51.75");

        let quote = calculator
            .quote(&order(dec!(40.0), false, PaymentMethod::Cash))
            .unwrap();
        assert_eq!(quote.total.to_string(), "46.00");
        assert_eq!(quote.delivery_fee.to_string(), "5.00");
        assert_eq!(quote.amount_due.to_string(), "51.00");
    }

    #[test]
    fn test_quote_with_custom_policy() {
        let calculator = PricingCalculator::new(PricingPolicy {
            tax_rate: dec!(0.20),
            delivery_threshold: dec!(100),
            delivery_fee: dec!(7.5),
            ..PricingPolicy::default()
        });

        let quote = calculator
            .quote(&order(dec!(50.0), true, PaymentMethod::PayPal))
            .unwrap();
        // 50 * 0.88 * 1.20
        assert_eq!(quote.total.to_string(), "52.80");
        assert_eq!(quote.discount, dec!(0.12));
        assert_eq!(quote.delivery_fee.to_string(), "7.50");
        assert_eq!(quote.amount_due.to_string(), "60.30");
    }

    #[test]
    fn test_quote_propagates_invalid_amount() {
        let calculator = PricingCalculator::default();
        let result = calculator.quote(&order(dec!(0), false, PaymentMethod::Cash));
        assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
    }
}
