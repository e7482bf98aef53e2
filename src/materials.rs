//! Materials

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for parsing a [`MaterialCategory`] from a string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown material category: {0}")]
pub struct UnknownCategory(String);

/// The closed set of label stock categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    /// Paper stock
    Paper,

    /// Plastic stock
    Plastic,

    /// Transparent stock (base color not applicable)
    Transparent,

    /// Laser-finish stock
    Laser,
}

impl MaterialCategory {
    /// All categories in display order.
    pub const ALL: [MaterialCategory; 4] = [
        MaterialCategory::Paper,
        MaterialCategory::Plastic,
        MaterialCategory::Transparent,
        MaterialCategory::Laser,
    ];

    /// Stable lowercase name, as used in configuration documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialCategory::Paper => "paper",
            MaterialCategory::Plastic => "plastic",
            MaterialCategory::Transparent => "transparent",
            MaterialCategory::Laser => "laser",
        }
    }
}

impl fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paper" => Ok(MaterialCategory::Paper),
            "plastic" => Ok(MaterialCategory::Plastic),
            "transparent" => Ok(MaterialCategory::Transparent),
            "laser" => Ok(MaterialCategory::Laser),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// One priced material/color combination in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOption {
    /// Unique identifier, stable across configuration reloads.
    pub id: String,

    /// Stock category.
    pub category: MaterialCategory,

    /// Human-readable color label. Absent for stocks where color is not
    /// applicable.
    #[serde(default)]
    pub base_color: Option<String>,

    /// Per-unit pricing factor for orders of more than 10,000 units.
    #[serde(rename = "factorOver10k")]
    pub factor_over_10k: Decimal,

    /// Per-unit pricing factor for orders of up to and including 10,000 units.
    #[serde(rename = "factorUnderOrEq10k")]
    pub factor_under_or_eq_10k: Decimal,

    /// Whether a base color selection is mandatory for this material.
    pub requires_color: bool,
}

/// Finds the catalog entry for a category/color pair.
///
/// The color is matched exactly when given; when absent or empty the first
/// entry of the category wins (used for categories such as
/// [`MaterialCategory::Transparent`] where color is not applicable).
#[must_use]
pub fn lookup_material<'a>(
    materials: &'a [MaterialOption],
    category: MaterialCategory,
    base_color: Option<&str>,
) -> Option<&'a MaterialOption> {
    let wanted = base_color.filter(|color| !color.is_empty());

    materials.iter().find(|m| {
        m.category == category
            && wanted.is_none_or(|color| m.base_color.as_deref() == Some(color))
    })
}

/// Ordered base-color labels available for a category.
///
/// Catalog order is preserved; entries without a color label are skipped.
#[must_use]
pub fn base_colors_for(materials: &[MaterialOption], category: MaterialCategory) -> Vec<&str> {
    materials
        .iter()
        .filter(|m| m.category == category)
        .filter_map(|m| m.base_color.as_deref())
        .collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::PricingConfig;

    #[test]
    fn lookup_matches_category_and_color() {
        let config = PricingConfig::default();

        let material = lookup_material(&config.materials, MaterialCategory::Paper, Some("Black"));

        assert_eq!(material.map(|m| m.id.as_str()), Some("paper-black"));
    }

    #[test]
    fn lookup_without_color_returns_first_of_category() {
        let config = PricingConfig::default();

        let material = lookup_material(&config.materials, MaterialCategory::Transparent, None);

        assert_eq!(material.map(|m| m.id.as_str()), Some("transparent"));

        let empty = lookup_material(&config.materials, MaterialCategory::Paper, Some(""));

        assert_eq!(empty.map(|m| m.id.as_str()), Some("paper-white"));
    }

    #[test]
    fn lookup_miss_is_none() {
        let config = PricingConfig::default();

        let material = lookup_material(&config.materials, MaterialCategory::Laser, Some("Pink"));

        assert!(material.is_none());
    }

    #[test]
    fn base_colors_preserve_catalog_order() {
        let config = PricingConfig::default();

        let colors = base_colors_for(&config.materials, MaterialCategory::Laser);

        assert_eq!(colors, ["Gold", "Silver"]);
    }

    #[test]
    fn category_round_trips_through_str() -> TestResult {
        for category in MaterialCategory::ALL {
            assert_eq!(category.as_str().parse::<MaterialCategory>()?, category);
        }

        assert!("vinyl".parse::<MaterialCategory>().is_err());

        Ok(())
    }
}
