pub mod order_reader;
pub mod quote_writer;
