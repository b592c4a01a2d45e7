//! Application layer containing the pricing rules.
//!
//! This module defines the `PricingCalculator`, the entry point for pricing a
//! payment and its delivery fee.

pub mod calculator;
