use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, instrument};

use crate::core::currency::{CurrencyCode, CurrencyRateProvider};
use crate::core::error::{ConversionError, UNKNOWN_API_ERROR};

// ExchangeRateApiProvider implementation for CurrencyRateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn latest_url(&self, key: &str, from: &CurrencyCode) -> String {
        format!("{}/{}/latest/{}", self.base_url, key, from)
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    conversion_rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

#[async_trait]
impl CurrencyRateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConversionError> {
        let url = self.latest_url(&self.api_key, from);
        debug!("Requesting latest rates from {}", self.latest_url("***", from));

        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .build()
            .map_err(|e| ConversionError::Transport(e.to_string()))?;

        // Avoid reqwest's error text here, it carries the URL and so the key
        let response = client.get(&url).send().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Rate request failed");
            ConversionError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(%status, "Received rate response");

        let text = response
            .text()
            .await
            .map_err(|e| ConversionError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|body| body.error_type)
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
            return Err(ConversionError::Api(message));
        }

        let data: LatestRatesResponse = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                error!(
                    error = ?e,
                    response = %text,
                    "Failed to parse rates response"
                );
                return Err(ConversionError::MalformedResponse(e.to_string()));
            }
        };

        data.conversion_rates
            .get(to.as_str())
            .copied()
            .ok_or_else(|| ConversionError::UnsupportedCurrency(to.to_string()))
    }
}
