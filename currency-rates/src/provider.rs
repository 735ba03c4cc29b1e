//! HTTP adapter for the upstream exchange rate API.
//!
//! Wire contract: `GET {base_url}/{base}` returns a JSON object with a
//! `rates` field mapping currency code to exchange ratio relative to `base`
//! (the `open.er-api.com/v6/latest` shape).

use serde::Deserialize;

use itineraries_types::domain::{CurrencyCode, RateTable};
use itineraries_types::error::ProviderError;
use itineraries_types::ports::RateProvider;

use crate::config::RatesConfig;

const PROVIDER_NAME: &str = "ExchangeRateApi";

/// Rate provider backed by one external HTTP rate source.
///
/// Transport failure, non-success status, malformed payload, missing `rates`
/// key, and timeout all surface as the same [`ProviderError`]. No retries
/// here; retry policy belongs to the caller.
pub struct ExchangeRateApi {
    base_url: String,
    http: reqwest::Client,
}

/// Subset of the upstream response we consume; other fields are ignored.
#[derive(Debug, Deserialize)]
struct RatesPayload {
    rates: RateTable,
}

impl ExchangeRateApi {
    /// Creates the adapter with the request timeout from `config`.
    pub fn new(config: &RatesConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::new(PROVIDER_NAME, e))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn unavailable(err: impl ToString) -> ProviderError {
        ProviderError::new(PROVIDER_NAME, err)
    }
}

#[async_trait::async_trait]
impl RateProvider for ExchangeRateApi {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError> {
        let url = format!("{}/{}", self.base_url, base);
        tracing::debug!(%url, "fetching exchange rates");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::unavailable)?
            .error_for_status()
            .map_err(Self::unavailable)?;

        let payload: RatesPayload = response.json().await.map_err(Self::unavailable)?;

        tracing::debug!(base = %base, currencies = payload.rates.len(), "rates fetched");
        Ok(payload.rates)
    }
}
