//! Pricing configuration

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::materials::{MaterialCategory, MaterialOption};

mod document;
mod store;

pub use document::{ConfigDocument, ExtraColorFactorsDocument, read_document};
pub use store::ConfigStore;

/// Errors related to configuration documents and overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration document.
    #[error("Failed to read config document: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Exchange rates must be strictly positive.
    #[error("exchange rate must be positive, got {0}")]
    NonPositiveExchangeRate(Decimal),

    /// Two catalog entries share an id.
    #[error("duplicate material id: {0}")]
    DuplicateMaterialId(String),

    /// Two catalog entries share a category/color pair, making lookups
    /// ambiguous.
    #[error("duplicate material for category {category}, color {base_color:?}")]
    DuplicateMaterial {
        /// Stock category of the colliding entries.
        category: MaterialCategory,
        /// Color label of the colliding entries.
        base_color: Option<String>,
    },
}

/// Additive factors applied per count of chosen printing colors.
///
/// One color (or none) contributes no extra factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraColorFactors {
    /// Factor added when exactly two printing colors are chosen.
    pub two_colors: Decimal,

    /// Factor added when three or more printing colors are chosen.
    pub three_or_more_colors: Decimal,
}

/// The whole tunable rule set for quote computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Currency units per computation unit. Also the reset value for the
    /// operator's transient rate override.
    pub exchange_rate: Decimal,

    /// Material catalog, in display order.
    pub materials: Vec<MaterialOption>,

    /// Extra-color factor brackets.
    #[serde(rename = "extraColorFactorTable")]
    pub extra_color_factors: ExtraColorFactors,
}

impl PricingConfig {
    /// Checks catalog invariants: unique ids and unique
    /// `(category, base_color)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateMaterialId`] or
    /// [`ConfigError::DuplicateMaterial`] on the first collision found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = FxHashSet::default();
        let mut pairs = FxHashSet::default();

        for material in &self.materials {
            if !ids.insert(material.id.as_str()) {
                return Err(ConfigError::DuplicateMaterialId(material.id.clone()));
            }

            if !pairs.insert((material.category, material.base_color.as_deref())) {
                return Err(ConfigError::DuplicateMaterial {
                    category: material.category,
                    base_color: material.base_color.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            exchange_rate: Decimal::from(12_000),
            materials: default_materials(),
            extra_color_factors: ExtraColorFactors {
                two_colors: Decimal::from(3),
                three_or_more_colors: Decimal::from(6),
            },
        }
    }
}

fn material(
    id: &str,
    category: MaterialCategory,
    base_color: &str,
    factor_over_10k: i64,
    factor_under_or_eq_10k: i64,
    requires_color: bool,
) -> MaterialOption {
    MaterialOption {
        id: id.to_string(),
        category,
        base_color: Some(base_color.to_string()),
        factor_over_10k: Decimal::from(factor_over_10k),
        factor_under_or_eq_10k: Decimal::from(factor_under_or_eq_10k),
        requires_color,
    }
}

/// The built-in material catalog, used whenever no external document (or no
/// usable `materials` field) is available.
fn default_materials() -> Vec<MaterialOption> {
    use MaterialCategory::{Laser, Paper, Plastic, Transparent};

    vec![
        material("paper-white", Paper, "White", 15, 20, true),
        material("paper-black", Paper, "Black", 20, 25, true),
        material("paper-gold-gloss", Paper, "Gloss Gold", 20, 25, true),
        material("paper-gold-matte", Paper, "Matte Gold", 20, 25, true),
        material("paper-silver-gloss", Paper, "Gloss Silver", 20, 25, true),
        material("paper-silver-matte", Paper, "Matte Silver", 20, 25, true),
        material("plastic-white", Plastic, "White", 20, 25, true),
        material("plastic-black", Plastic, "Black", 20, 25, true),
        material("plastic-gold-gloss", Plastic, "Gloss Gold", 20, 25, true),
        material("plastic-gold-matte", Plastic, "Matte Gold", 20, 25, true),
        material("plastic-silver-gloss", Plastic, "Gloss Silver", 20, 25, true),
        material("plastic-silver-matte", Plastic, "Matte Silver", 20, 25, true),
        material("transparent", Transparent, "Transparent", 20, 25, false),
        material("laser-gold", Laser, "Gold", 20, 25, true),
        material("laser-silver", Laser, "Silver", 20, 25, true),
    ]
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_config_is_valid() -> TestResult {
        let config = PricingConfig::default();

        config.validate()?;

        assert_eq!(config.materials.len(), 15);
        assert_eq!(config.exchange_rate, Decimal::from(12_000));

        Ok(())
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let mut config = PricingConfig::default();
        config.materials.push(material(
            "paper-white-again",
            MaterialCategory::Paper,
            "White",
            15,
            20,
            true,
        ));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateMaterial { .. })
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut config = PricingConfig::default();
        config.materials.push(material(
            "paper-white",
            MaterialCategory::Paper,
            "Ivory",
            15,
            20,
            true,
        ));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateMaterialId(id)) if id == "paper-white"
        ));
    }
}
