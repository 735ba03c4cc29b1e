//! # Itineraries Client SDK
//!
//! A typed Rust client for the itinerary sorting API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use itineraries_types::domain::Itinerary;
use itineraries_types::dto::{AlgorithmsResponse, SortItinerariesRequest, SortItinerariesResponse};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Itinerary sorting API client.
pub struct SortClient {
    base_url: String,
    http: Client,
}

impl SortClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists the available sorting algorithms.
    pub async fn algorithms(&self) -> Result<Vec<String>, ClientError> {
        let resp: AlgorithmsResponse = self.get("/sorts").await?;
        Ok(resp.algorithms)
    }

    /// Sorts a batch of itineraries with the named algorithm.
    pub async fn sort(
        &self,
        algorithm: &str,
        itineraries: Vec<Itinerary>,
    ) -> Result<Vec<Itinerary>, ClientError> {
        let req = SortItinerariesRequest {
            sorting_type: algorithm.to_string(),
            itineraries,
        };
        let resp: SortItinerariesResponse = self.post("/sort_itineraries", &req).await?;
        Ok(resp.sorted_itineraries)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
