//! External configuration documents

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{config::ConfigError, materials::MaterialOption};

/// A partial pricing configuration as retrieved from an external source.
///
/// Every field is optional; missing fields keep their built-in defaults when
/// the document is applied to a [`super::ConfigStore`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Replacement exchange rate. Ignored unless strictly positive.
    #[serde(default)]
    pub exchange_rate: Option<Decimal>,

    /// Replacement material catalog. Replaces the defaults wholesale when
    /// present and non-empty; there is no per-item merging.
    #[serde(default)]
    pub materials: Option<Vec<MaterialOption>>,

    /// Extra-color factor brackets, each overridable on its own.
    #[serde(default, rename = "extraColorFactorTable")]
    pub extra_color_factors: Option<ExtraColorFactorsDocument>,
}

/// Partial extra-color factor table.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraColorFactorsDocument {
    /// Factor added when exactly two printing colors are chosen.
    #[serde(default)]
    pub two_colors: Option<Decimal>,

    /// Factor added when three or more printing colors are chosen.
    #[serde(default)]
    pub three_or_more_colors: Option<Decimal>,
}

impl ConfigDocument {
    /// Parses a YAML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] when the document is malformed or a field
    /// has the wrong type.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(contents)?)
    }
}

/// Reads and parses a YAML configuration document from disk.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Yaml`] when it cannot be parsed.
pub fn read_document(path: impl AsRef<Path>) -> Result<ConfigDocument, ConfigError> {
    let contents = fs::read_to_string(path)?;

    ConfigDocument::from_yaml(&contents)
}
