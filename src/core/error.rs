//! Errors raised while fetching a rate or converting an amount.

use thiserror::Error;

/// Default message used when the provider gives no `error-type`.
pub const UNKNOWN_API_ERROR: &str = "unknown error";

/// Every failure the conversion flow reports back to the user.
///
/// Raised by the rate provider and passed through the converter untouched; the
/// CLI session is the only place that renders these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    /// The target code is absent from the provider's rate table.
    #[error("Unable to find a rate for currency {0}.")]
    UnsupportedCurrency(String),

    /// The provider answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// A success response whose body could not be interpreted.
    #[error("Malformed response from rate provider: {0}")]
    MalformedResponse(String),

    /// No response was received at all.
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}
