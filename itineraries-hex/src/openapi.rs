//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use itineraries_types::domain::{CurrencyCode, Itinerary, Price};
use itineraries_types::dto::{
    AlgorithmsResponse, ErrorResponse, SortItinerariesRequest, SortItinerariesResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "ok"}))
    )
)]
async fn healthz() {}

/// List available sorting algorithms
#[utoipa::path(
    get,
    path = "/sorts",
    tag = "itineraries",
    responses(
        (status = 200, description = "Names of the registered sorting algorithms", body = AlgorithmsResponse)
    )
)]
async fn list_sorts() {}

/// Sort itineraries by the given algorithm
#[utoipa::path(
    post,
    path = "/sort_itineraries",
    tag = "itineraries",
    request_body = SortItinerariesRequest,
    responses(
        (status = 200, description = "Itineraries in sorted order", body = SortItinerariesResponse),
        (status = 400, description = "Unknown algorithm or currency", body = ErrorResponse),
        (status = 503, description = "Exchange rate provider unavailable", body = ErrorResponse)
    )
)]
async fn sort_itineraries() {}

#[derive(OpenApi)]
#[openapi(
    paths(healthz, list_sorts, sort_itineraries),
    components(
        schemas(
            SortItinerariesRequest,
            SortItinerariesResponse,
            AlgorithmsResponse,
            ErrorResponse,
            Itinerary,
            Price,
            CurrencyCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "itineraries", description = "Itinerary sorting operations"),
    )
)]
pub struct ApiDoc;
