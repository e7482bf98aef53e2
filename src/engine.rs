//! Quote evaluation

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    config::PricingConfig,
    materials::{MaterialOption, lookup_material},
    quote::Quote,
    request::{MAX_PRINTING_COLORS, PricingRequest},
};

/// Order quantity above which the over-10k factor applies.
///
/// The boundary is strict: exactly this many units still uses the
/// under-or-equal factor.
pub const VOLUME_BREAK_QUANTITY: i64 = 10_000;

/// Square millimeters per square centimeter.
const MM2_PER_CM2: Decimal = Decimal::ONE_HUNDRED;

/// One violated business rule in a pricing request.
///
/// Display strings are the operator-facing messages.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Quantity was zero or negative.
    #[error("quantity must be positive")]
    QuantityNotPositive,

    /// Length was zero or negative.
    #[error("length must be positive")]
    LengthNotPositive,

    /// Width was zero or negative.
    #[error("width must be positive")]
    WidthNotPositive,

    /// No known material category was selected, or the category/color pair
    /// matched nothing in the catalog.
    #[error("material must be selected")]
    MaterialNotSelected,

    /// The material requires a base color and none was chosen.
    #[error("base color must be selected")]
    BaseColorRequired,

    /// No printing color was chosen.
    #[error("at least one printing color required")]
    NoPrintingColors,

    /// More than three printing colors were chosen.
    #[error("at most three printing colors allowed")]
    TooManyPrintingColors,
}

/// The full, ordered list of rules a request violated.
///
/// Invalid requests never produce a partial quote; the operator corrects the
/// inputs and the next evaluation re-validates from scratch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("pricing request is invalid: {}", display_errors(.errors))]
pub struct InvalidRequest {
    /// Violations in rule order.
    pub errors: SmallVec<[ValidationError; 4]>,
}

fn display_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks every business rule and collects all violations in rule order.
///
/// An empty result means the request is priceable.
#[must_use]
pub fn validate(config: &PricingConfig, request: &PricingRequest) -> Vec<ValidationError> {
    let (errors, _) = validate_and_resolve(config, request);

    errors.into_vec()
}

/// Combines the base material factor and the extra-color factor into the
/// final pricing factor.
///
/// This is the single place where the combination policy lives; the current
/// policy is additive.
#[must_use]
pub fn combine_factors(base_factor: Decimal, extra_color_factor: Decimal) -> Decimal {
    base_factor + extra_color_factor
}

/// Prices a request against a configuration.
///
/// Pure and stateless: identical inputs always produce identical outputs.
///
/// # Errors
///
/// Returns [`InvalidRequest`] carrying every violated rule; no partial quote
/// is ever produced.
pub fn evaluate(config: &PricingConfig, request: &PricingRequest) -> Result<Quote, InvalidRequest> {
    let (errors, material) = validate_and_resolve(config, request);

    let (Some(material), true) = (material, errors.is_empty()) else {
        return Err(InvalidRequest { errors });
    };

    let area_cm2 = request.length_mm * request.width_mm / MM2_PER_CM2;

    let base_factor = if request.quantity > VOLUME_BREAK_QUANTITY {
        material.factor_over_10k
    } else {
        material.factor_under_or_eq_10k
    };

    let extra_color_factor = extra_color_factor(config, request.printing_colors.len());

    let final_factor = combine_factors(base_factor, extra_color_factor);

    let price_per_1000 = final_factor * area_cm2 * request.exchange_rate;
    let total_price = price_per_1000 * Decimal::from(request.quantity) / Decimal::ONE_THOUSAND;

    Ok(Quote::new(
        area_cm2,
        base_factor,
        extra_color_factor,
        final_factor,
        price_per_1000,
        total_price,
    ))
}

/// The additive factor for a given printing-color count.
///
/// Zero for one color; the configured bracket values for two and for three or
/// more. Counts outside 1..=3 are rejected by validation before pricing, but
/// the rule itself is total.
fn extra_color_factor(config: &PricingConfig, color_count: usize) -> Decimal {
    match color_count {
        0 | 1 => Decimal::ZERO,
        2 => config.extra_color_factors.two_colors,
        _ => config.extra_color_factors.three_or_more_colors,
    }
}

/// Runs the rule checks in order and resolves the selected material once.
///
/// A category/color pair that matches nothing in the catalog is reported as
/// [`ValidationError::MaterialNotSelected`], never a crash. When no material
/// resolves and the color is missing, `requires_color` conservatively
/// defaults to true.
fn validate_and_resolve<'a>(
    config: &'a PricingConfig,
    request: &PricingRequest,
) -> (SmallVec<[ValidationError; 4]>, Option<&'a MaterialOption>) {
    let mut errors = SmallVec::new();

    if request.quantity <= 0 {
        errors.push(ValidationError::QuantityNotPositive);
    }

    if request.length_mm <= Decimal::ZERO {
        errors.push(ValidationError::LengthNotPositive);
    }

    if request.width_mm <= Decimal::ZERO {
        errors.push(ValidationError::WidthNotPositive);
    }

    let base_color = request
        .base_color
        .as_deref()
        .filter(|color| !color.is_empty());

    let material = match request.category {
        None => {
            errors.push(ValidationError::MaterialNotSelected);
            None
        }
        Some(category) => {
            let material = lookup_material(&config.materials, category, base_color);

            if material.is_none() && base_color.is_some() {
                errors.push(ValidationError::MaterialNotSelected);
            }

            material
        }
    };

    let requires_color = material.is_none_or(|m| m.requires_color);

    if requires_color && base_color.is_none() {
        errors.push(ValidationError::BaseColorRequired);
    }

    if request.printing_colors.is_empty() {
        errors.push(ValidationError::NoPrintingColors);
    }

    if request.printing_colors.len() > MAX_PRINTING_COLORS {
        errors.push(ValidationError::TooManyPrintingColors);
    }

    (errors, material)
}
