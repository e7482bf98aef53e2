//! Pricing requests

use rust_decimal::Decimal;
use thiserror::Error;

use crate::materials::MaterialCategory;

/// Maximum number of printing colors per label.
pub const MAX_PRINTING_COLORS: usize = 3;

/// The fixed printing-color palette offered by the presentation layer.
///
/// Display-only: the engine accepts any color label and does not check
/// membership in this list.
pub const PRINTING_COLOR_PALETTE: [&str; 11] = [
    "White",
    "Black",
    "Red",
    "Blue",
    "Green",
    "Orange",
    "Yellow",
    "Gold",
    "Silver",
    "Laser Gold",
    "Laser Silver",
];

/// Errors from the printing-color selection helpers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorSelectionError {
    /// The selection already holds [`MAX_PRINTING_COLORS`] colors.
    #[error("at most three printing colors allowed")]
    LimitReached,
}

/// One quote computation input.
///
/// A plain value: the presentation collaborator holds one of these, mutates
/// it as the operator edits the form, and re-evaluates after every change.
/// Nothing is validated at construction time; [`crate::engine::evaluate`]
/// re-checks everything on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRequest {
    /// Number of labels ordered. Must be positive to be valid.
    pub quantity: i64,

    /// Label length in millimeters.
    pub length_mm: Decimal,

    /// Label width in millimeters.
    pub width_mm: Decimal,

    /// Selected stock category, if any.
    pub category: Option<MaterialCategory>,

    /// Selected base color label, if any.
    pub base_color: Option<String>,

    /// Chosen printing colors. Order matters for display only.
    pub printing_colors: Vec<String>,

    /// The exchange rate in force for this computation.
    pub exchange_rate: Decimal,
}

impl PricingRequest {
    /// A fresh request with the initial form values: 1,000 units of
    /// 10 mm x 10 mm white paper, printed in white.
    #[must_use]
    pub fn new(exchange_rate: Decimal) -> Self {
        PricingRequest {
            quantity: 1_000,
            length_mm: Decimal::from(10),
            width_mm: Decimal::from(10),
            category: Some(MaterialCategory::Paper),
            base_color: Some("White".to_string()),
            printing_colors: vec!["White".to_string()],
            exchange_rate,
        }
    }

    /// The operator's reset action: back to 1,000 units of 50 mm x 50 mm
    /// white paper printed in white, at the configured default rate.
    pub fn reset(&mut self, default_exchange_rate: Decimal) {
        *self = PricingRequest {
            quantity: 1_000,
            length_mm: Decimal::from(50),
            width_mm: Decimal::from(50),
            category: Some(MaterialCategory::Paper),
            base_color: Some("White".to_string()),
            printing_colors: vec!["White".to_string()],
            exchange_rate: default_exchange_rate,
        };
    }

    /// Toggles a printing color: removes it when already chosen, adds it
    /// otherwise. Duplicates cannot arise through this method.
    ///
    /// # Errors
    ///
    /// Returns [`ColorSelectionError::LimitReached`] when adding would exceed
    /// [`MAX_PRINTING_COLORS`]; the selection is left unchanged.
    pub fn toggle_printing_color(&mut self, color: &str) -> Result<(), ColorSelectionError> {
        if let Some(position) = self.printing_colors.iter().position(|c| c == color) {
            self.printing_colors.remove(position);
            return Ok(());
        }

        if self.printing_colors.len() >= MAX_PRINTING_COLORS {
            return Err(ColorSelectionError::LimitReached);
        }

        self.printing_colors.push(color.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn toggle_adds_then_removes() -> TestResult {
        let mut request = PricingRequest::new(Decimal::from(12_000));

        request.toggle_printing_color("Red")?;
        assert_eq!(request.printing_colors, ["White", "Red"]);

        request.toggle_printing_color("Red")?;
        assert_eq!(request.printing_colors, ["White"]);

        Ok(())
    }

    #[test]
    fn toggle_refuses_a_fourth_color() -> TestResult {
        let mut request = PricingRequest::new(Decimal::from(12_000));

        request.toggle_printing_color("Red")?;
        request.toggle_printing_color("Blue")?;

        assert_eq!(
            request.toggle_printing_color("Green"),
            Err(ColorSelectionError::LimitReached)
        );
        assert_eq!(request.printing_colors.len(), MAX_PRINTING_COLORS);

        Ok(())
    }

    #[test]
    fn removal_is_always_allowed_at_the_limit() -> TestResult {
        let mut request = PricingRequest::new(Decimal::from(12_000));

        request.toggle_printing_color("Red")?;
        request.toggle_printing_color("Blue")?;
        request.toggle_printing_color("White")?;

        assert_eq!(request.printing_colors, ["Red", "Blue"]);

        Ok(())
    }
}
