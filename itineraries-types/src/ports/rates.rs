//! Exchange rate provider port.
//!
//! This trait defines the interface for upstream rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::{CurrencyCode, RateTable};
use crate::error::ProviderError;

/// Port trait for exchange rate providers.
///
/// One call maps to one outbound request. Retry policy belongs to the
/// caller, not the provider.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Identifies this provider in error reports.
    fn name(&self) -> &'static str;

    /// Fetches exchange ratios relative to `base`.
    /// Every failure mode collapses into a single [`ProviderError`].
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, ProviderError>;
}
