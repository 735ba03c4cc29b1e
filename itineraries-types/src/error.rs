//! Error types for the itinerary sorting service.

use crate::domain::CurrencyCode;

/// Domain-level errors (value validation failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Currency code must be 3 letters, got `{0}`")]
    InvalidCurrencyCode(String),
}

/// Sort-level errors: the request payload, not the system, is at fault.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("Sorting algorithm `{0}` is unknown.")]
    UnknownAlgorithm(String),

    #[error("Currency rate for {0} is not available")]
    UnknownCurrency(CurrencyCode),
}

/// Upstream rate provider failure.
///
/// Transport errors, non-success statuses, malformed payloads, and timeouts
/// all collapse into this one kind; callers decide on fallback without
/// inspecting the sub-cause. Cloneable so a single failed fetch can be
/// reported to every request that was waiting on it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("<{provider}>: {message}")]
pub struct ProviderError {
    /// Identity of the provider that failed
    pub provider: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(provider: impl Into<String>, message: impl ToString) -> Self {
        Self {
            provider: provider.into(),
            message: message.to_string(),
        }
    }
}

/// Startup-time registration errors.
///
/// These indicate a programming or configuration mistake and abort startup;
/// they are never surfaced to end users.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("sort algorithm `{0}` is already registered")]
    Conflict(String),

    #[error("sort algorithm name cannot be empty")]
    EmptyName,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes: `Sort` is the client's fault (400),
/// `RatesUnavailable` means the upstream is down and the client may retry
/// later (503).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    RatesUnavailable(#[from] ProviderError),
}
