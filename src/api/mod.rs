//! API Module
//!
//! HTTP handlers and routing for the random numbers REST API.
//!
//! # Endpoints
//! - `GET /api/random-numbers` - List every record
//! - `POST /api/generate-random` - Append a freshly generated record
//! - `DELETE /api/random-numbers/:key` - Remove a record by key
//! - `POST /api/check-random` - Compare a guessed value with a record
//! - `POST /api/reset` - Regenerate the initial collection

pub mod handlers;
pub mod latency;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
