#![allow(dead_code)]

use pricecalc::domain::payment::PaymentMethod;
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 4] = ["order", "amount", "first_order", "method"];

/// Writes the given rows below the order header.
pub fn write_orders(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Random positive amount between 0.01 and 10 000.00.
pub fn random_amount(rng: &mut StdRng) -> Decimal {
    Decimal::new(rng.gen_range(1..=1_000_000), 2)
}

pub fn random_method(rng: &mut StdRng) -> PaymentMethod {
    PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())]
}

/// Writes `rows` random, valid orders.
pub fn generate_orders(path: &Path, rows: usize, rng: &mut StdRng) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        let first_order = rng.gen_bool(0.5);
        wtr.write_record([
            i.to_string(),
            random_amount(rng).to_string(),
            first_order.to_string(),
            random_method(rng).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
