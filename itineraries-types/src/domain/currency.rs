//! Validated currency code value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::DomainError;

/// An ISO 4217 currency code: exactly three ASCII letters, stored uppercase.
///
/// Validation happens at every boundary (deserialization, `FromStr`), so any
/// `CurrencyCode` held by the core is well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "USD")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a currency code.
    pub fn new(code: &str) -> Result<Self, DomainError> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_code() {
        let code = CurrencyCode::new("USD").unwrap();
        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn test_lowercase_is_normalized() {
        let code = "eur".parse::<CurrencyCode>().unwrap();
        assert_eq!(code.as_str(), "EUR");
    }

    #[test]
    fn test_wrong_length_fails() {
        assert!(matches!(
            CurrencyCode::new("US"),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
        assert!(matches!(
            CurrencyCode::new("USDT"),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_non_alphabetic_fails() {
        assert!(matches!(
            CurrencyCode::new("U5D"),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_deserialization_enforces_validation() {
        let ok: Result<CurrencyCode, _> = serde_json::from_str("\"GBP\"");
        assert!(ok.is_ok());

        let bad: Result<CurrencyCode, _> = serde_json::from_str("\"POUNDS\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let code = CurrencyCode::new("INR").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"INR\"");
    }
}
