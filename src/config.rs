//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::store::DEFAULT_INITIAL_COUNT;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Artificial delay applied to every GET request, in milliseconds
    pub get_delay_ms: u64,
    /// Number of records the collection starts with and resets to
    pub initial_count: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `GET_DELAY_MS` - Delay before GET handlers run (default: 4000)
    /// - `INITIAL_COUNT` - Records generated at start and on reset (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            get_delay_ms: parse_var("GET_DELAY_MS").unwrap_or(defaults.get_delay_ms),
            initial_count: parse_var("INITIAL_COUNT").unwrap_or(defaults.initial_count),
        }
    }

    /// The GET delay as a `Duration`.
    pub fn get_delay(&self) -> Duration {
        Duration::from_millis(self.get_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            get_delay_ms: 4000,
            initial_count: DEFAULT_INITIAL_COUNT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
