//! Random Numbers - an in-memory collection of random numbers over HTTP
//!
//! Serves a list of generated key/value records with an artificial delay on
//! reads, and provides a client data layer that caches the list and
//! invalidates it after mutations.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use client::{DataLayer, RandomNumbersClient};
pub use config::Config;
pub use store::{Record, RecordStore};
