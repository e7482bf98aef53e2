//! Etiquote prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigDocument, ConfigError, ConfigStore, ExtraColorFactors, PricingConfig},
    engine::{InvalidRequest, VOLUME_BREAK_QUANTITY, ValidationError, evaluate, validate},
    materials::{MaterialCategory, MaterialOption, base_colors_for, lookup_material},
    quote::{Quote, QuoteRenderError},
    request::{
        ColorSelectionError, MAX_PRINTING_COLORS, PRINTING_COLOR_PALETTE, PricingRequest,
    },
};
