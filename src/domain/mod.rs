//! Domain layer: value objects and rates the pricing rules are built from.
//!
//! Nothing here performs I/O.

pub mod money;
pub mod order;
pub mod payment;
pub mod policy;
