//! Quotes

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};
use thiserror::Error;

/// Errors that can occur when rendering a quote.
#[derive(Debug, Error)]
pub enum QuoteRenderError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// A fully computed price quote for one valid request.
///
/// Only produced by [`crate::engine::evaluate`] when every rule passes; no
/// partially computed quote exists. All values are exact decimals; rounding
/// happens at presentation time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    area_cm2: Decimal,
    base_factor: Decimal,
    extra_color_factor: Decimal,
    final_factor: Decimal,
    price_per_1000: Decimal,
    total_price: Decimal,
}

impl Quote {
    pub(crate) fn new(
        area_cm2: Decimal,
        base_factor: Decimal,
        extra_color_factor: Decimal,
        final_factor: Decimal,
        price_per_1000: Decimal,
        total_price: Decimal,
    ) -> Self {
        Quote {
            area_cm2,
            base_factor,
            extra_color_factor,
            final_factor,
            price_per_1000,
            total_price,
        }
    }

    /// Label area in square centimeters.
    #[must_use]
    pub fn area_cm2(&self) -> Decimal {
        self.area_cm2
    }

    /// Per-unit factor of the selected material for the requested volume.
    #[must_use]
    pub fn base_factor(&self) -> Decimal {
        self.base_factor
    }

    /// Additive factor for the chosen printing-color count.
    #[must_use]
    pub fn extra_color_factor(&self) -> Decimal {
        self.extra_color_factor
    }

    /// Combined pricing factor.
    #[must_use]
    pub fn final_factor(&self) -> Decimal {
        self.final_factor
    }

    /// Price for 1,000 labels, in currency units.
    #[must_use]
    pub fn price_per_1000(&self) -> Decimal {
        self.price_per_1000
    }

    /// Price for the full requested quantity, in currency units.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// The per-1,000 price as money in the given currency.
    #[must_use]
    pub fn price_per_1000_in(&self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_decimal(self.price_per_1000, currency)
    }

    /// The total price as money in the given currency.
    #[must_use]
    pub fn total_price_in(&self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_decimal(self.total_price, currency)
    }

    /// Writes a summary table of the quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be written.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        currency: &'static Currency,
    ) -> Result<(), QuoteRenderError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Value"]);
        builder.push_record(["Area (cm²)", &self.area_cm2.to_string()]);
        builder.push_record(["Base factor", &self.base_factor.to_string()]);
        builder.push_record(["Extra color factor", &self.extra_color_factor.to_string()]);
        builder.push_record(["Final factor", &self.final_factor.to_string()]);
        builder.push_record([
            "Price per 1,000",
            &self.price_per_1000_in(currency).to_string(),
        ]);
        builder.push_record(["Total", &self.total_price_in(currency).to_string()]);

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| QuoteRenderError::IO)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{config::PricingConfig, engine::evaluate, request::PricingRequest};

    #[test]
    fn renders_prices_as_money() -> TestResult {
        let quote = evaluate(
            &PricingConfig::default(),
            &PricingRequest::new(Decimal::from(12_000)),
        )?;

        assert_eq!(
            quote.price_per_1000_in(iso::USD).to_string(),
            "$240,000.00"
        );

        Ok(())
    }

    #[test]
    fn summary_table_lists_every_figure() -> TestResult {
        let quote = evaluate(
            &PricingConfig::default(),
            &PricingRequest::new(Decimal::from(12_000)),
        )?;

        let mut rendered = Vec::new();
        quote.write_to(&mut rendered, iso::USD)?;
        let rendered = String::from_utf8(rendered)?;

        assert!(rendered.contains("Area (cm²)"), "missing area row");
        assert!(rendered.contains("Final factor"), "missing factor row");
        assert!(rendered.contains("$240,000.00"), "missing total row");

        Ok(())
    }
}
