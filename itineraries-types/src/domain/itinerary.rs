//! Itinerary domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::currency::CurrencyCode;

/// Price of an itinerary.
///
/// The amount is stored in the smallest unit of the currency (cents, paise,
/// etc.) to avoid floating-point precision issues. The upstream API contract
/// carries `amount` as a decimal string on the wire; deserialization accepts
/// both string and integer forms, serialization always emits a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Price {
    /// Amount in smallest currency unit, serialized as a string
    #[serde(with = "amount_string")]
    #[schema(value_type = String, example = "620")]
    pub amount: i64,
    pub currency: CurrencyCode,
}

/// A single travel itinerary, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Itinerary {
    /// Opaque itinerary identifier
    #[schema(example = "urban_heritage_odyssey")]
    pub id: String,
    /// Total travel time in minutes
    #[schema(example = 275)]
    pub duration_minutes: u32,
    pub price: Price,
}

mod amount_string {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(amount: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = i64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer amount, as a number or a decimal string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
                i64::try_from(v).map_err(|_| E::custom("amount out of range"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
                v.parse()
                    .map_err(|_| E::custom(format!("invalid amount `{v}`")))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
