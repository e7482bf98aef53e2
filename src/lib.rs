//! Etiquote
//!
//! Etiquote is a pricing and validation engine for custom printed-label quotes: material
//! catalog lookup, request validation, and exact-decimal price computation, parametrized
//! by an externally loaded configuration with complete built-in defaults.

pub mod config;
pub mod engine;
pub mod materials;
pub mod prelude;
pub mod quote;
pub mod request;
pub mod utils;
