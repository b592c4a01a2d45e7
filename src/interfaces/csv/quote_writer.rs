use crate::domain::order::Quote;
use crate::error::Result;
use std::io::Write;

/// Writes quotes as CSV, one row per priced order.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes a single quote. The header row is emitted with the first one.
    pub fn write_quote(&mut self, quote: &Quote) -> Result<()> {
        self.writer.serialize(quote)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
