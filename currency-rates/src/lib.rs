//! # Currency Rates
//!
//! Exchange rate acquisition and caching.
//!
//! Two pieces:
//! - [`ExchangeRateApi`] - HTTP adapter for one upstream rate source.
//!   Collapses every failure mode into a uniform provider error.
//! - [`RateCache`] - per-base-currency snapshot cache with absolute TTL
//!   expiry and single-flight refresh: concurrent misses for the same base
//!   currency collectively trigger at most one upstream fetch, while
//!   unrelated base currencies refresh in parallel.
//!
//! The cache is an explicit instance constructed once at startup and passed
//! by reference to the sort engine; there is no global state.

pub mod cache;
pub mod config;
pub mod provider;

pub use cache::RateCache;
pub use config::RatesConfig;
pub use provider::ExchangeRateApi;
