//! Quote Demo
//!
//! Prices one label order from the command line and prints the quote table,
//! or the list of validation errors when the inputs are not priceable.
//!
//! Use `--config` to point at a YAML pricing configuration document; without
//! it (or when the document is unusable) the built-in defaults apply.
//! Use `-r` to override the exchange rate for this quote.

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::iso;

use etiquote::{
    config::ConfigStore,
    engine::evaluate,
    request::PricingRequest,
    utils::QuoteDemoArgs,
};

/// Quote Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = QuoteDemoArgs::parse();

    let mut store = match args.config.as_deref() {
        Some(path) => ConfigStore::load(path),
        None => ConfigStore::new(),
    };

    if let Some(rate) = args.rate {
        store.set_exchange_rate(rate)?;
    }

    let request = PricingRequest {
        quantity: args.quantity,
        length_mm: args.length,
        width_mm: args.width,
        category: args.category.parse().ok(),
        base_color: args.base_color,
        printing_colors: args.printing_colors,
        exchange_rate: store.exchange_rate(),
    };

    match evaluate(store.config(), &request) {
        Ok(quote) => quote.write_to(io::stdout(), iso::USD)?,
        Err(invalid) => {
            println!("Please correct the following:");
            for error in &invalid.errors {
                println!("  - {error}");
            }
        }
    }

    Ok(())
}
