//! Utils

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Arguments for the quote demo
#[derive(Debug, Parser)]
pub struct QuoteDemoArgs {
    /// Number of labels to quote
    #[clap(short = 'n', long, default_value_t = 1_000)]
    pub quantity: i64,

    /// Label length in millimeters
    #[clap(short, long, default_value = "50")]
    pub length: Decimal,

    /// Label width in millimeters
    #[clap(short, long, default_value = "50")]
    pub width: Decimal,

    /// Material category (paper, plastic, transparent, laser)
    #[clap(short = 'm', long, default_value = "paper")]
    pub category: String,

    /// Base color of the material
    #[clap(short, long)]
    pub base_color: Option<String>,

    /// Printing colors (repeat for up to three colors)
    #[clap(short = 'p', long = "printing-color", default_values_t = [String::from("White")])]
    pub printing_colors: Vec<String>,

    /// Path to a YAML pricing configuration document
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Override the exchange rate for this quote
    #[clap(short = 'r', long)]
    pub rate: Option<Decimal>,
}
