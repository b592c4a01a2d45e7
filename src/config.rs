//! Loading the pricing policy from a TOML file.
//!
//! Decimal values are best written as strings (`tax_rate = "0.15"`) so they
//! are read exactly; bare numbers are accepted as well.

use crate::domain::policy::PricingPolicy;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Parses a policy from TOML text and validates it.
pub fn parse_policy(source: &str) -> Result<PricingPolicy> {
    let policy: PricingPolicy = toml::from_str(source)?;
    policy.validate()?;
    Ok(policy)
}

/// Reads and validates the policy stored at `path`.
pub fn load_policy(path: impl AsRef<Path>) -> Result<PricingPolicy> {
    let source = fs::read_to_string(path)?;
    parse_policy(&source)
}
