//! Converts amounts using a [`CurrencyRateProvider`].

use super::currency::{CurrencyCode, CurrencyRateProvider};
use super::error::ConversionError;
use tracing::debug;

/// Converts `amount` of `from` into `to` at the provider's current rate.
///
/// Provider errors are returned as-is.
pub async fn convert(
    provider: &dyn CurrencyRateProvider,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<f64, ConversionError> {
    let rate = provider.get_rate(from, to).await?;
    debug!(%from, %to, rate, "Applying conversion rate");
    Ok(amount * rate)
}
