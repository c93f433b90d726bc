//! Core business logic abstractions

pub mod config;
pub mod converter;
pub mod currency;
pub mod error;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{CurrencyCode, CurrencyRateProvider};
pub use error::ConversionError;
