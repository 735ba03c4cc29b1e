//! Domain models for the itinerary sorting service.

pub mod currency;
pub mod itinerary;
pub mod rates;

pub use currency::CurrencyCode;
pub use itinerary::{Itinerary, Price};
pub use rates::{RateSnapshot, RateTable};
