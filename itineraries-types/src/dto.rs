//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Itinerary;

/// Request to sort a batch of itineraries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortItinerariesRequest {
    /// Name of the sorting algorithm to apply
    #[schema(example = "cheapest")]
    pub sorting_type: String,
    pub itineraries: Vec<Itinerary>,
}

/// Response carrying the reordered itineraries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SortItinerariesResponse {
    /// The algorithm that produced this ordering
    #[schema(example = "cheapest")]
    pub sorting_type: String,
    pub sorted_itineraries: Vec<Itinerary>,
}

/// Response listing the available sorting algorithms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlgorithmsResponse {
    #[schema(example = json!(["fastest", "cheapest", "best"]))]
    pub algorithms: Vec<String>,
}

/// Error response schema.
///
/// Bad-request and service-unavailable responses share this shape so clients
/// can branch on the status code alone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Short HTTP-level reason
    #[schema(example = "Bad Request")]
    pub reason: String,
    /// Human-readable description of what went wrong
    pub error: String,
}
