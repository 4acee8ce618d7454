//! HTTP client and cached data layer for the random numbers API.

mod data;
mod error;
mod query;

pub use data::{DataLayer, View};
pub use error::{ClientError, Result};
pub use query::{QueryCache, QueryKey, QueryState};

use reqwest::StatusCode;

use crate::models::{
    CheckRequest, CheckResponse, CreateResponse, DeleteResponse, ErrorResponse, ResetResponse,
};
use crate::store::Record;

/// HTTP client for the random numbers API.
#[derive(Debug, Clone)]
pub struct RandomNumbersClient {
    client: reqwest::Client,
    base_url: String,
}

impl RandomNumbersClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (RANDOM_NUMBERS_URL or default).
    pub fn from_env() -> Self {
        let base_url = std::env::var("RANDOM_NUMBERS_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every record.
    pub async fn list_numbers(&self) -> Result<Vec<Record>> {
        let response = self
            .client
            .get(self.url("/api/random-numbers"))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Ask the server to generate and append a record.
    pub async fn generate_random(&self) -> Result<CreateResponse> {
        let response = self
            .client
            .post(self.url("/api/generate-random"))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete the record stored under `key`.
    pub async fn delete_number(&self, key: &str) -> Result<DeleteResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/api/random-numbers/{}", key)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Compare a guessed value with the record stored under the request's key.
    pub async fn check_random(&self, req: &CheckRequest) -> Result<CheckResponse> {
        let response = self
            .client
            .post(self.url("/api/check-random"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Regenerate the server's initial collection.
    pub async fn reset(&self) -> Result<ResetResponse> {
        let response = self.client.post(self.url("/api/reset")).send().await?;
        self.handle_response(response).await
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or map the status to a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(message),
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        })
    }
}
