//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use itineraries_types::domain::CurrencyCode;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// Base URL of the upstream exchange rate API
    pub exchange_rate_api_url: String,
    /// Bound on one upstream request
    pub exchange_rate_api_timeout: Duration,
    /// Currency every rate-dependent sort converts prices into
    pub base_currency: CurrencyCode,
    /// How long a fetched rate snapshot stays valid
    pub currency_cache_ttl: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let exchange_rate_api_url = env::var("EXCHANGE_RATE_API_URL")
            .map_err(|_| anyhow::anyhow!("EXCHANGE_RATE_API_URL environment variable is required"))?;

        let exchange_rate_api_timeout = env::var("EXCHANGE_RATE_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map(Duration::from_secs)?;

        let base_currency = env::var("CURRENCY_BASE")
            .unwrap_or_else(|_| "USD".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid CURRENCY_BASE: {e}"))?;

        let currency_cache_ttl = env::var("CURRENCY_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map(Duration::from_secs)?;

        Ok(Self {
            port,
            exchange_rate_api_url,
            exchange_rate_api_timeout,
            base_currency,
            currency_cache_ttl,
        })
    }
}
