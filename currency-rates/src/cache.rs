//! Per-base-currency rate snapshot cache with single-flight refresh.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use dashmap::DashMap;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::time::Instant;

use itineraries_types::domain::{CurrencyCode, RateSnapshot};
use itineraries_types::error::ProviderError;
use itineraries_types::ports::RateProvider;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<RateSnapshot>, ProviderError>>>;

/// A snapshot together with its absolute expiry instant.
///
/// Expiry is wall-clock absolute, not last-access-based: entries age out
/// deterministically regardless of traffic pattern.
struct StoredSnapshot {
    snapshot: Arc<RateSnapshot>,
    expires_at: Instant,
}

impl StoredSnapshot {
    fn is_fresh(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Default)]
struct EntryState {
    stored: Option<StoredSnapshot>,
    inflight: Option<SharedFetch>,
}

/// One slot per base currency. Created lazily, never deleted.
///
/// The mutex guards only the state cell; the fetch itself runs inside a
/// shared future that all concurrent callers of this base join, so callers
/// for different base currencies never contend.
#[derive(Default)]
struct CacheEntry {
    state: Mutex<EntryState>,
}

impl CacheEntry {
    fn lock(&self) -> MutexGuard<'_, EntryState> {
        self.state.lock().expect("rate cache entry lock poisoned")
    }
}

/// Caches one [`RateSnapshot`] per base currency, refreshing through the
/// injected provider when a snapshot is missing or expired.
///
/// Guarantees:
/// - at most one in-flight provider fetch per base currency; every caller
///   that observes the same miss receives the same snapshot
/// - a failed refresh propagates the provider error and leaves the prior
///   entry untouched (to be retried on the next call); expired data is
///   never served
/// - the in-flight fetch is not owned by any single requester, so a
///   cancelled request abandons only its own wait
pub struct RateCache<P: RateProvider> {
    provider: Arc<P>,
    cache_ttl: Duration,
    entries: DashMap<CurrencyCode, Arc<CacheEntry>>,
}

impl<P: RateProvider> RateCache<P> {
    /// Creates a cache that refreshes through `provider` and keeps
    /// snapshots for `cache_ttl`.
    pub fn new(provider: P, cache_ttl: Duration) -> Self {
        Self {
            provider: Arc::new(provider),
            cache_ttl,
            entries: DashMap::new(),
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the current snapshot for `base`, fetching if needed.
    pub async fn get(&self, base: &CurrencyCode) -> Result<Arc<RateSnapshot>, ProviderError> {
        let entry = self.entry(base);

        let fetch = {
            let mut state = entry.lock();

            // Re-check under the entry lock: callers that raced on the same
            // miss resolve here instead of stacking up duplicate fetches.
            if let Some(stored) = &state.stored {
                if stored.is_fresh(Instant::now()) {
                    return Ok(Arc::clone(&stored.snapshot));
                }
            }

            match &state.inflight {
                Some(fetch) => fetch.clone(),
                None => {
                    tracing::info!(base = %base, provider = self.provider.name(), "refreshing rate snapshot");
                    let fetch = Self::start_refresh(
                        Arc::clone(&self.provider),
                        base.clone(),
                        Arc::clone(&entry),
                        self.cache_ttl,
                    );
                    state.inflight = Some(fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Builds the shared refresh future for one base currency.
    ///
    /// The future stores its result into the entry itself, so it completes
    /// meaningfully no matter which of the waiting requests drives it.
    fn start_refresh(
        provider: Arc<P>,
        base: CurrencyCode,
        entry: Arc<CacheEntry>,
        cache_ttl: Duration,
    ) -> SharedFetch {
        async move {
            let result = provider.fetch_rates(&base).await;

            let mut state = entry.lock();
            state.inflight = None;

            // An error must not disturb whatever was stored before: a prior
            // expired snapshot stays as-is and the next call retries.
            let rates = result?;

            let snapshot = Arc::new(RateSnapshot::new(base, rates));
            state.stored = Some(StoredSnapshot {
                snapshot: Arc::clone(&snapshot),
                expires_at: Instant::now() + cache_ttl,
            });

            Ok(snapshot)
        }
        .boxed()
        .shared()
    }

    fn entry(&self, base: &CurrencyCode) -> Arc<CacheEntry> {
        self.entries.entry(base.clone()).or_default().clone()
    }
}
