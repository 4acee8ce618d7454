//! API Routes
//!
//! Configures the Axum router with all random numbers endpoints.

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    check_handler, delete_handler, generate_handler, list_handler, reset_handler, AppState,
};
use super::latency::delay_get_requests;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Latency: GET requests wait `AppState::get_delay` before the handler runs
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/random-numbers", get(list_handler))
        .route("/api/random-numbers/:key", delete(delete_handler))
        .route("/api/generate-random", post(generate_handler))
        .route("/api/check-random", post(check_handler))
        .route("/api/reset", post(reset_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            delay_get_requests,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
