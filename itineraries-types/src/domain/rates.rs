//! Exchange rate snapshot types.

use std::collections::HashMap;

use super::currency::CurrencyCode;

/// Exchange ratios keyed by currency code, relative to some base currency.
pub type RateTable = HashMap<CurrencyCode, f64>;

/// An immutable view of exchange ratios relative to one base currency,
/// taken from a single provider response.
///
/// A snapshot is complete or it does not exist: the cache either serves a
/// whole, unexpired snapshot or fetches a new one. Expiration bookkeeping
/// lives with the cache so that a request which captured a snapshot can keep
/// comparing against it even if the wall clock passes the expiry mid-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    base: CurrencyCode,
    rates: RateTable,
}

impl RateSnapshot {
    /// Creates a snapshot from a provider rate table.
    pub fn new(base: CurrencyCode, rates: RateTable) -> Self {
        Self { base, rates }
    }

    /// The currency all ratios are relative to.
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Exchange ratio for `code` relative to the base currency, if known.
    pub fn ratio(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Number of currencies covered by this snapshot.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
