//! Sort algorithm registry.
//!
//! Algorithms are registered through an explicit, ordered builder call list
//! executed once at process start. After `build()` the registry is
//! read-only, so request-time lookups need no locking. The advertised
//! algorithm set is exactly the registered key set.

use itineraries_types::domain::{CurrencyCode, Itinerary, RateSnapshot};
use itineraries_types::error::{RegistryError, SortError};

/// Ordering key produced by a sort algorithm for one itinerary.
///
/// Keys are IEEE-754 doubles compared with `total_cmp`, which is a total
/// order; since every itinerary's key is computed exactly once per request,
/// the resulting comparison is a valid strict weak ordering no matter how
/// the input is permuted.
#[derive(Debug, Clone, Copy)]
pub struct SortKey(f64);

impl SortKey {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Rate lookup scoped to one sort request.
///
/// The snapshot is threaded explicitly from the engine into every key
/// computation - there is no ambient rate state, so concurrent requests are
/// trivially isolated from each other.
pub struct RateContext<'a> {
    snapshot: Option<&'a RateSnapshot>,
}

impl<'a> RateContext<'a> {
    /// Context for algorithms with no currency dependency.
    pub fn none() -> Self {
        Self { snapshot: None }
    }

    /// Context backed by a captured snapshot.
    pub fn with(snapshot: &'a RateSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Exchange ratio for `code`, or the error that fails the whole sort.
    pub fn ratio(&self, code: &CurrencyCode) -> Result<f64, SortError> {
        self.snapshot
            .and_then(|snapshot| snapshot.ratio(code))
            .ok_or_else(|| SortError::UnknownCurrency(code.clone()))
    }
}

/// Key function evaluated once per itinerary.
pub type KeyFn = fn(&Itinerary, &RateContext<'_>) -> Result<SortKey, SortError>;

/// Immutable descriptor of one sort algorithm.
#[derive(Debug, Clone, Copy)]
pub struct SortDescriptor {
    name: &'static str,
    needs_rates: bool,
    key_fn: KeyFn,
}

impl SortDescriptor {
    pub const fn new(name: &'static str, needs_rates: bool, key_fn: KeyFn) -> Self {
        Self {
            name,
            needs_rates,
            key_fn,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the engine must capture a rate snapshot before comparing.
    pub fn needs_rates(&self) -> bool {
        self.needs_rates
    }

    /// Computes the ordering key for one itinerary.
    pub fn key(
        &self,
        itinerary: &Itinerary,
        rates: &RateContext<'_>,
    ) -> Result<SortKey, SortError> {
        (self.key_fn)(itinerary, rates)
    }
}

/// Read-only lookup table of sort algorithms, in registration order.
pub struct SortRegistry {
    sorts: Vec<SortDescriptor>,
}

impl SortRegistry {
    /// Starts an empty registration list.
    pub fn builder() -> SortRegistryBuilder {
        SortRegistryBuilder { sorts: Vec::new() }
    }

    /// Registry with the three shipped algorithms.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        Ok(Self::builder()
            .register(FASTEST)?
            .register(CHEAPEST)?
            .register(BEST)?
            .build())
    }

    /// Looks up an algorithm by name.
    pub fn lookup(&self, name: &str) -> Option<&SortDescriptor> {
        self.sorts.iter().find(|sort| sort.name == name)
    }

    /// Advertised algorithm names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.sorts.iter().map(|sort| sort.name).collect()
    }
}

/// Append-only registration list. Collisions and empty names are rejected:
/// a silent overwrite would change sort behavior depending on
/// initialization order.
pub struct SortRegistryBuilder {
    sorts: Vec<SortDescriptor>,
}

impl SortRegistryBuilder {
    pub fn register(mut self, descriptor: SortDescriptor) -> Result<Self, RegistryError> {
        if descriptor.name().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.sorts.iter().any(|sort| sort.name == descriptor.name) {
            return Err(RegistryError::Conflict(descriptor.name.to_string()));
        }
        self.sorts.push(descriptor);
        Ok(self)
    }

    pub fn build(self) -> SortRegistry {
        SortRegistry { sorts: self.sorts }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in algorithms (ascending key order)
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest travel time first. No currency dependency.
pub const FASTEST: SortDescriptor = SortDescriptor::new("fastest", false, fastest_key);

/// Lowest base-currency price first.
pub const CHEAPEST: SortDescriptor = SortDescriptor::new("cheapest", true, cheapest_key);

/// Optimal balance between price and duration: price in the base currency
/// weighted by travel time.
pub const BEST: SortDescriptor = SortDescriptor::new("best", true, best_key);

fn fastest_key(itinerary: &Itinerary, _rates: &RateContext<'_>) -> Result<SortKey, SortError> {
    Ok(SortKey::new(f64::from(itinerary.duration_minutes)))
}

fn cheapest_key(itinerary: &Itinerary, rates: &RateContext<'_>) -> Result<SortKey, SortError> {
    let ratio = rates.ratio(&itinerary.price.currency)?;
    Ok(SortKey::new(itinerary.price.amount as f64 / ratio))
}

fn best_key(itinerary: &Itinerary, rates: &RateContext<'_>) -> Result<SortKey, SortError> {
    let ratio = rates.ratio(&itinerary.price.currency)?;
    let base_price = itinerary.price.amount as f64 / ratio;
    Ok(SortKey::new(base_price * f64::from(itinerary.duration_minutes)))
}
