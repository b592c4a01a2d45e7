//! Adapters between the pricing core and the outside world.

pub mod csv;
