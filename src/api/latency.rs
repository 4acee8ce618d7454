//! Latency Injection
//!
//! Middleware that holds every GET request for a fixed delay before the
//! handler runs. Other methods pass straight through.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::handlers::AppState;

/// Sleeps for `state.get_delay` on GET requests, then forwards the request.
pub async fn delay_get_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::GET && !state.get_delay.is_zero() {
        debug!(
            "Delaying GET {} by {}ms",
            request.uri().path(),
            state.get_delay.as_millis()
        );
        tokio::time::sleep(state.get_delay).await;
    }

    next.run(request).await
}
