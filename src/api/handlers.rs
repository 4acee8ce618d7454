//! API Handlers
//!
//! HTTP request handlers for each random numbers endpoint.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::models::{CheckRequest, CheckResponse, CreateResponse, DeleteResponse, ResetResponse};
use crate::store::{Record, RecordStore, CHECK_NOT_FOUND};

/// Application state shared across all handlers.
///
/// Contains the record store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe record store
    pub store: Arc<RwLock<RecordStore>>,
    /// Delay applied to GET requests before their handler runs
    pub get_delay: Duration,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: RecordStore, get_delay: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            get_delay,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the store with `initial_count` records.
    pub fn from_config(config: &Config) -> Self {
        Self::new(RecordStore::new(config.initial_count), config.get_delay())
    }
}

/// Handler for GET /api/random-numbers
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<Record>> {
    let store = state.store.read().await;
    info!("Returning existing random numbers: {}", store.len());

    Json(store.list().to_vec())
}

/// Handler for POST /api/generate-random
pub async fn generate_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateResponse>) {
    let mut store = state.store.write().await;
    let record = store.create();
    info!("Added new random number. Total count: {}", store.len());

    (StatusCode::CREATED, Json(CreateResponse::new(record)))
}

/// Handler for DELETE /api/random-numbers/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.store.write().await;
    let removal = store.delete_by_key(&key)?;
    info!(
        "Removed random number with key: {}. Remaining count: {}",
        key, removal.remaining_count
    );

    Ok(Json(DeleteResponse::from(removal)))
}

/// Handler for POST /api/check-random
///
/// A request without a JSON content type is read as an empty body; a body
/// that is not valid JSON is answered with 400.
pub async fn check_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CheckRequest::default(),
        Err(rejection) => return Err(StoreError::InvalidRequest(rejection.body_text())),
    };

    if let Some(error_msg) = req.validate() {
        return Err(StoreError::InvalidRequest(error_msg));
    }
    // Keys are always strings, so any other JSON key matches nothing.
    let key = req
        .key_str()
        .ok_or_else(|| StoreError::NotFound(CHECK_NOT_FOUND.to_string()))?
        .to_string();
    let received = req.value.unwrap_or_default();

    let store = state.store.read().await;
    let outcome = store.check_value(&key, &received)?;

    Ok(Json(CheckResponse::new(outcome, received)))
}

/// Handler for POST /api/reset
pub async fn reset_handler(State(state): State<AppState>) -> Json<ResetResponse> {
    let mut store = state.store.write().await;
    let count = store.reset();
    info!("Random numbers reset. Total count: {}", count);

    Json(ResetResponse::new(count))
}
