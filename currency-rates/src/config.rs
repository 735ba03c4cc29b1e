//! Configuration values for the rate subsystem.

use std::time::Duration;

/// Default snapshot lifetime: one day.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Default bound on one upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the rate provider and cache.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Base URL of the upstream rate API, e.g. `https://open.er-api.com/v6/latest`
    pub base_url: String,
    /// How long a fetched snapshot stays valid
    pub cache_ttl: Duration,
    /// Upper bound on a single upstream request
    pub request_timeout: Duration,
}

impl RatesConfig {
    /// Creates a configuration with default TTL and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
