//! Sort Application Service
//!
//! Orchestrates one sort request: algorithm lookup, optional rate snapshot
//! capture, key evaluation, and the sort itself. Contains NO infrastructure
//! logic - pure business orchestration.

use itineraries_types::domain::{CurrencyCode, Itinerary};
use itineraries_types::error::{AppError, SortError};
use itineraries_types::ports::RateProvider;

use currency_rates::RateCache;

use crate::registry::{RateContext, SortRegistry};

/// Application service for sort operations.
///
/// Generic over `P: RateProvider` - the rate source is injected at compile
/// time. This enables:
/// - Swapping providers without code changes
/// - Testing with scripted providers
/// - Compile-time checks for port implementation
pub struct SortService<P: RateProvider> {
    registry: SortRegistry,
    rates: RateCache<P>,
    base_currency: CurrencyCode,
}

impl<P: RateProvider> SortService<P> {
    /// Creates a sort service over the given registry and rate cache.
    /// All rate-dependent algorithms convert prices into `base_currency`.
    pub fn new(registry: SortRegistry, rates: RateCache<P>, base_currency: CurrencyCode) -> Self {
        Self {
            registry,
            rates,
            base_currency,
        }
    }

    /// Returns a reference to the underlying rate cache.
    pub fn rates(&self) -> &RateCache<P> {
        &self.rates
    }

    /// Names of the available algorithms.
    pub fn algorithms(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Sorts `itineraries` with the named algorithm.
    ///
    /// The output is a permutation of the input. Itineraries with equal
    /// keys keep their input order, so sorting an already-sorted sequence
    /// returns an equal sequence. A currency missing from the captured
    /// snapshot fails the whole request - partial sorts are not a valid
    /// outcome.
    pub async fn sort(
        &self,
        algorithm: &str,
        itineraries: Vec<Itinerary>,
    ) -> Result<Vec<Itinerary>, AppError> {
        let descriptor = self
            .registry
            .lookup(algorithm)
            .ok_or_else(|| SortError::UnknownAlgorithm(algorithm.to_string()))?;

        // Captured once per request: every comparison below sees the same
        // snapshot even if the cache refreshes concurrently.
        let snapshot = if descriptor.needs_rates() {
            Some(self.rates.get(&self.base_currency).await?)
        } else {
            None
        };
        let rates = match snapshot.as_deref() {
            Some(snapshot) => RateContext::with(snapshot),
            None => RateContext::none(),
        };

        let mut keyed = Vec::with_capacity(itineraries.len());
        for itinerary in itineraries {
            let key = descriptor.key(&itinerary, &rates)?;
            keyed.push((key, itinerary));
        }

        // Stable sort over precomputed keys
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

        tracing::debug!(algorithm, count = keyed.len(), "sorted itineraries");
        Ok(keyed.into_iter().map(|(_, itinerary)| itinerary).collect())
    }
}
