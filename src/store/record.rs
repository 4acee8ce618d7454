//! Record Module
//!
//! A single generated random number and the functions that produce one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::store::{KEY_PREFIX, KEY_SUFFIX_LENGTH, MAX_VALUE, MIN_VALUE};

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// == Record ==
/// One key/value pair in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key, `random_<millis>_<suffix>`
    pub key: String,
    /// Value in `MIN_VALUE..=MAX_VALUE`
    pub value: u32,
}

impl Record {
    /// Creates a record from its parts.
    pub fn new(key: impl Into<String>, value: u32) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Generates a record with a fresh key and a random value.
    pub fn generate() -> Self {
        Self::new(generate_key(), generate_value())
    }
}

/// Builds a key from the current unix time in milliseconds and a random
/// lowercase base-36 suffix.
pub fn generate_key() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..KEY_SUFFIX_LENGTH)
        .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
        .collect();

    format!(
        "{}_{}_{}",
        KEY_PREFIX,
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
}

/// Draws a value uniformly from `MIN_VALUE..=MAX_VALUE`.
pub fn generate_value() -> u32 {
    rand::rng().random_range(MIN_VALUE..=MAX_VALUE)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_format() {
        let key = generate_key();
        let parts: Vec<&str> = key.split('_').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], KEY_PREFIX);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), KEY_SUFFIX_LENGTH);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_key_is_unique() {
        assert_ne!(generate_key(), generate_key());
    }

    #[test]
    fn test_generate_value_in_range() {
        for _ in 0..1000 {
            let value = generate_value();
            assert!((MIN_VALUE..=MAX_VALUE).contains(&value));
        }
    }

    #[test]
    fn test_record_serialize() {
        let record = Record::new("random_1_abcdefgh", 42);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["key"], "random_1_abcdefgh");
        assert_eq!(json["value"], 42);
    }
}
