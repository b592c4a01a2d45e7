use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pricecalc::application::calculator::PricingCalculator;
use pricecalc::config;
use pricecalc::domain::policy::PricingPolicy;
use pricecalc::interfaces::csv::order_reader::OrderReader;
use pricecalc::interfaces::csv::quote_writer::QuoteWriter;
use pricecalc::logging;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file
    input: PathBuf,

    /// Pricing policy TOML file (optional). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Price orders without tax
    #[arg(long)]
    tax_free: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let mut policy = match &cli.config {
        Some(path) => config::load_policy(path).into_diagnostic()?,
        None => PricingPolicy::default(),
    };
    if cli.tax_free {
        policy.tax_rate = Decimal::ZERO;
    }
    tracing::debug!(?policy, "pricing policy loaded");

    let calculator = PricingCalculator::new(policy);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);

    let stdout = io::stdout();
    let mut writer = QuoteWriter::new(stdout.lock());

    let (mut priced, mut rejected) = (0usize, 0usize);
    for order_result in reader.orders() {
        match order_result {
            Ok(order) => match calculator.quote(&order) {
                Ok(quote) => {
                    writer.write_quote(&quote).into_diagnostic()?;
                    priced += 1;
                }
                Err(e) => {
                    eprintln!("Error pricing order {}: {}", order.order, e);
                    rejected += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading order: {}", e);
                rejected += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;

    tracing::info!(priced, rejected, "finished pricing orders");
    Ok(())
}
