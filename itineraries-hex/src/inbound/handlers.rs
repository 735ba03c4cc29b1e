//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use itineraries_types::dto::{
    AlgorithmsResponse, ErrorResponse, SortItinerariesRequest, SortItinerariesResponse,
};
use itineraries_types::error::AppError;
use itineraries_types::ports::RateProvider;

use crate::SortService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: SortService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = match &self.0 {
            AppError::Sort(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::RatesUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
            }
        };

        let body = ErrorResponse {
            reason: reason.to_string(),
            error: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// List the available sorting algorithms.
#[tracing::instrument(skip(state))]
pub async fn list_sorts<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
) -> impl IntoResponse {
    Json(AlgorithmsResponse {
        algorithms: state.service.algorithms(),
    })
}

/// Sort a batch of itineraries with the requested algorithm.
#[tracing::instrument(
    skip(state, req),
    fields(algorithm = %req.sorting_type, itineraries = req.itineraries.len())
)]
pub async fn sort_itineraries<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Json(req): Json<SortItinerariesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let sorted = state.service.sort(&req.sorting_type, req.itineraries).await?;

    Ok(Json(SortItinerariesResponse {
        sorting_type: req.sorting_type,
        sorted_itineraries: sorted,
    }))
}
