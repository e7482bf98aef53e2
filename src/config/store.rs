//! Configuration store

use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{ConfigDocument, ConfigError, PricingConfig, read_document};

/// Holds the active pricing configuration plus the operator's transient
/// exchange-rate override.
///
/// Configuration retrieval is best-effort: any failure keeps the built-in
/// defaults (or whatever fields had already been applied) and is reported
/// only through a diagnostic log. The store is fully usable with zero
/// external configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    config: PricingConfig,
    exchange_rate: Decimal,
}

impl ConfigStore {
    /// Creates a store holding the built-in default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = PricingConfig::default();
        let exchange_rate = config.exchange_rate;

        ConfigStore {
            config,
            exchange_rate,
        }
    }

    /// Creates a store from a configuration document on disk.
    ///
    /// A missing file, a malformed document, or wrong field types all fall
    /// back to the defaults with a warning; this never fails.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let mut store = ConfigStore::new();

        match read_document(&path) {
            Ok(document) => store.apply(document),
            Err(err) => warn!(
                path = %path.as_ref().display(),
                error = %err,
                "could not load pricing configuration, using built-in defaults",
            ),
        }

        store
    }

    /// Creates a store from the YAML contents of a configuration document.
    ///
    /// Parse failures fall back to the defaults with a warning.
    #[must_use]
    pub fn from_yaml(contents: &str) -> Self {
        let mut store = ConfigStore::new();

        match ConfigDocument::from_yaml(contents) {
            Ok(document) => store.apply(document),
            Err(err) => warn!(
                error = %err,
                "could not parse pricing configuration, using built-in defaults",
            ),
        }

        store
    }

    /// Applies a parsed document field by field.
    ///
    /// A present, non-empty `materials` list replaces the catalog wholesale;
    /// the extra-color brackets override individually; a positive exchange
    /// rate replaces both the configured default and the effective rate.
    /// Unusable fields are skipped with a warning, never an error.
    pub fn apply(&mut self, document: ConfigDocument) {
        if let Some(materials) = document.materials {
            if materials.is_empty() {
                warn!("config document has an empty material catalog, keeping current one");
            } else {
                let candidate = PricingConfig {
                    materials,
                    ..self.config.clone()
                };

                match candidate.validate() {
                    Ok(()) => {
                        debug!(count = candidate.materials.len(), "replaced material catalog");
                        self.config.materials = candidate.materials;
                    }
                    Err(err) => {
                        warn!(error = %err, "config document material catalog is ambiguous, keeping current one");
                    }
                }
            }
        }

        if let Some(factors) = document.extra_color_factors {
            if let Some(two) = factors.two_colors {
                self.config.extra_color_factors.two_colors = two;
            }

            if let Some(three) = factors.three_or_more_colors {
                self.config.extra_color_factors.three_or_more_colors = three;
            }
        }

        if let Some(rate) = document.exchange_rate {
            if rate > Decimal::ZERO {
                debug!(%rate, "replaced default exchange rate");
                self.config.exchange_rate = rate;
                self.exchange_rate = rate;
            } else {
                warn!(%rate, "config document exchange rate is not positive, keeping current one");
            }
        }
    }

    /// The active configuration snapshot, immutable for the session.
    #[must_use]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// The exchange rate in force: the configured default, or the operator's
    /// transient override.
    #[must_use]
    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    /// Overrides the effective exchange rate for this session.
    ///
    /// The configured default is untouched; [`ConfigStore::reset_exchange_rate`]
    /// restores it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveExchangeRate`] when the rate is not
    /// strictly positive.
    pub fn set_exchange_rate(&mut self, rate: Decimal) -> Result<(), ConfigError> {
        if rate <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveExchangeRate(rate));
        }

        self.exchange_rate = rate;

        Ok(())
    }

    /// Resets the effective exchange rate back to the configured default.
    pub fn reset_exchange_rate(&mut self) {
        self.exchange_rate = self.config.exchange_rate;
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::new()
    }
}
