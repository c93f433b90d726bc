//! Currency conversion abstractions

use super::error::ConversionError;
use async_trait::async_trait;
use std::fmt::Display;
use std::str::FromStr;

/// A short currency code such as `USD`.
///
/// Input is trimmed and upper-cased; the set of valid codes is left to the rate
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: &str) -> Self {
        CurrencyCode(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::new(s))
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    /// Units of `to` per one unit of `from`, as of now.
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConversionError>;
}
