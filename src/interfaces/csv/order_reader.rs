use crate::domain::order::Order;
use crate::error::{PricingError, Result};
use std::io::Read;

/// Streams `Order` rows out of a CSV file with an
/// `order, amount, first_order, method` header.
///
/// Cells may be padded with spaces, and a row with a missing trailing column
/// is reported as a bad row instead of aborting the whole file.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Wraps an orders file or any other byte source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    ///
    /// A malformed row yields an error for that row only; the rows after it
    /// are still read.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PricingError::from))
    }
}
