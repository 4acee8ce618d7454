//! Request DTOs for the random numbers API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body for POST /api/check-random
///
/// Both fields accept any JSON. A field that is absent deserializes to
/// `None`; an explicit `null` deserializes to `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Key of the record to compare against
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub key: Option<Value>,
    /// Guessed value, coerced to a number when compared
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

/// Deserialize a field that is present, keeping `null` as `Some(Value::Null)`.
///
/// Only runs when the field appears in the body; `#[serde(default)]` covers
/// the absent case.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl CheckRequest {
    /// Creates a request for the given key and value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: Some(Value::String(key.into())),
            value: Some(value.into()),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid. The key
    /// must be present and truthy (not `null`, `""`, `0` or `false`); the
    /// value only has to be present.
    pub fn validate(&self) -> Option<String> {
        let has_key = self.key.as_ref().is_some_and(is_truthy);
        if !has_key || self.value.is_none() {
            return Some("Both key and value are required".to_string());
        }
        None
    }

    /// The key as a string, if it is one.
    pub fn key_str(&self) -> Option<&str> {
        self.key.as_ref().and_then(Value::as_str)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
