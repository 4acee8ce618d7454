//! Response DTOs for the random numbers API
//!
//! Defines the structure of outgoing HTTP response bodies. The same types
//! are deserialized by the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{CheckOutcome, Record, Removal};

/// Response body for POST /api/generate-random
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    /// Always true
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// The record that was generated
    pub data: Record,
}

impl CreateResponse {
    /// Creates a new CreateResponse
    pub fn new(data: Record) -> Self {
        Self {
            success: true,
            message: "New random number generated".to_string(),
            data,
        }
    }
}

/// Response body for DELETE /api/random-numbers/:key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// The record that was removed
    pub removed: Record,
    /// Number of records left in the collection
    #[serde(rename = "remainingCount")]
    pub remaining_count: usize,
}

impl From<Removal> for DeleteResponse {
    fn from(removal: Removal) -> Self {
        Self {
            success: true,
            message: "Random number removed successfully".to_string(),
            removed: removal.removed,
            remaining_count: removal.remaining_count,
        }
    }
}

/// Response body for POST /api/check-random
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Whether the received value matched
    pub success: bool,
    /// Human readable verdict
    pub message: String,
    /// The stored value
    pub expected: u32,
    /// The value from the request, echoed verbatim
    pub received: Value,
}

impl CheckResponse {
    /// Creates a new CheckResponse from a store comparison
    pub fn new(outcome: CheckOutcome, received: Value) -> Self {
        let message = if outcome.matches {
            "The value matches!"
        } else {
            "The value does not match"
        };
        Self {
            success: outcome.matches,
            message: message.to_string(),
            expected: outcome.expected,
            received,
        }
    }
}

/// Response body for POST /api/reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Always true
    pub success: bool,
    /// Human readable summary
    pub message: String,
    /// Size of the regenerated collection
    pub count: usize,
}

impl ResetResponse {
    /// Creates a new ResetResponse
    pub fn new(count: usize) -> Self {
        Self {
            success: true,
            message: format!("Random numbers reset to initial {} values", count),
            count,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
