//! Record Store Module
//!
//! Ordered in-memory collection of records, unique by key.

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::store::{Record, CHECK_NOT_FOUND, DELETE_NOT_FOUND};

// == Removal ==
/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The record that was taken out
    pub removed: Record,
    /// Number of records left afterwards
    pub remaining_count: usize,
}

// == Check Outcome ==
/// Result of comparing a received value against a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the received value equals the stored one
    pub matches: bool,
    /// The stored value
    pub expected: u32,
}

// == Record Store ==
/// Owns the collection of generated records.
#[derive(Debug)]
pub struct RecordStore {
    /// Records in insertion order
    records: Vec<Record>,
    /// Size of the collection after construction or reset
    initial_count: usize,
}

impl RecordStore {
    // == Constructor ==
    /// Creates a store seeded with `initial_count` freshly generated records.
    pub fn new(initial_count: usize) -> Self {
        let mut store = Self {
            records: Vec::with_capacity(initial_count),
            initial_count,
        };
        store.reset();
        store
    }

    // == List ==
    /// Returns the current records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    // == Create ==
    /// Generates a new record, appends it and returns a copy.
    ///
    /// A generated key that already exists is discarded and drawn again.
    pub fn create(&mut self) -> Record {
        let record = self.generate_unique();
        self.records.push(record.clone());
        record
    }

    // == Delete ==
    /// Removes the first record with the given key.
    pub fn delete_by_key(&mut self, key: &str) -> Result<Removal> {
        let index = self
            .records
            .iter()
            .position(|record| record.key == key)
            .ok_or_else(|| StoreError::NotFound(DELETE_NOT_FOUND.to_string()))?;

        let removed = self.records.remove(index);
        Ok(Removal {
            removed,
            remaining_count: self.records.len(),
        })
    }

    // == Check Value ==
    /// Compares `received` against the value stored under `key`.
    ///
    /// `received` is coerced to a number first, the way JavaScript's
    /// `Number(...)` does. Anything that does not coerce never matches.
    pub fn check_value(&self, key: &str, received: &Value) -> Result<CheckOutcome> {
        if key.is_empty() {
            return Err(StoreError::InvalidRequest(
                "Both key and value are required".to_string(),
            ));
        }

        let entry = self
            .records
            .iter()
            .find(|record| record.key == key)
            .ok_or_else(|| StoreError::NotFound(CHECK_NOT_FOUND.to_string()))?;

        let matches = coerce_number(received)
            .map(|number| number == f64::from(entry.value))
            .unwrap_or(false);

        Ok(CheckOutcome {
            matches,
            expected: entry.value,
        })
    }

    // == Reset ==
    /// Replaces the collection with `initial_count` fresh records.
    ///
    /// Returns the new length.
    pub fn reset(&mut self) -> usize {
        self.records.clear();
        for _ in 0..self.initial_count {
            let record = self.generate_unique();
            self.records.push(record);
        }
        self.records.len()
    }

    // == Lookup ==
    /// Returns true if a record with the given key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.iter().any(|record| record.key == key)
    }

    // == Length ==
    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn generate_unique(&self) -> Record {
        loop {
            let record = Record::generate();
            if !self.contains_key(&record.key) {
                return record;
            }
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(crate::store::DEFAULT_INITIAL_COUNT)
    }
}

/// Numeric reading of a JSON value with JavaScript `Number(...)` rules.
///
/// `None` stands for NaN.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_numeric_string(text),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => coerce_array_element(only),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

/// An array converts through its string form, so a lone element reads as
/// its own string: `[null]` is `""`, `[true]` is `"true"`.
fn coerce_array_element(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(_) | Value::Object(_) => None,
        Value::Number(_) | Value::String(_) | Value::Array(_) => coerce_number(value),
    }
}

fn parse_numeric_string(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust also accepts "inf", "infinity" and "nan" in any case; JavaScript
    // only knows the spelling handled above.
    if trimmed
        .bytes()
        .any(|b| !(b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEFAULT_INITIAL_COUNT, MAX_VALUE, MIN_VALUE};
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_store_new_seeds_initial_records() {
        let store = RecordStore::default();
        assert_eq!(store.len(), DEFAULT_INITIAL_COUNT);

        let keys: HashSet<&str> = store.list().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys.len(), DEFAULT_INITIAL_COUNT);
        assert!(store
            .list()
            .iter()
            .all(|r| (MIN_VALUE..=MAX_VALUE).contains(&r.value)));
    }

    #[test]
    fn test_store_empty() {
        let store = RecordStore::new(0);
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_store_create_appends() {
        let mut store = RecordStore::new(3);
        let before: Vec<String> = store.list().iter().map(|r| r.key.clone()).collect();

        let created = store.create();

        assert_eq!(store.len(), 4);
        assert!(!before.contains(&created.key));
        assert_eq!(store.list().last(), Some(&created));
    }

    #[test]
    fn test_store_delete() {
        let mut store = RecordStore::new(5);
        let target = store.list()[2].clone();

        let removal = store.delete_by_key(&target.key).unwrap();

        assert_eq!(removal.removed, target);
        assert_eq!(removal.remaining_count, 4);
        assert_eq!(store.len(), 4);
        assert!(!store.contains_key(&target.key));
    }

    #[test]
    fn test_store_delete_keeps_order() {
        let mut store = RecordStore::new(4);
        let keys: Vec<String> = store.list().iter().map(|r| r.key.clone()).collect();

        store.delete_by_key(&keys[1]).unwrap();

        let remaining: Vec<&str> = store.list().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(remaining, vec![&keys[0][..], &keys[2][..], &keys[3][..]]);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store = RecordStore::new(5);

        let result = store.delete_by_key("nonexistent");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_store_check_value_match() {
        let store = RecordStore::new(2);
        let record = store.list()[0].clone();

        let outcome = store.check_value(&record.key, &json!(record.value)).unwrap();
        assert!(outcome.matches);
        assert_eq!(outcome.expected, record.value);
    }

    #[test]
    fn test_store_check_value_mismatch() {
        let store = RecordStore::new(2);
        let record = store.list()[0].clone();

        let outcome = store
            .check_value(&record.key, &json!(record.value + 1))
            .unwrap();
        assert!(!outcome.matches);
        assert_eq!(outcome.expected, record.value);
    }

    #[test]
    fn test_store_check_value_numeric_string() {
        let store = RecordStore::new(1);
        let record = store.list()[0].clone();

        let outcome = store
            .check_value(&record.key, &json!(record.value.to_string()))
            .unwrap();
        assert!(outcome.matches);

        let outcome = store.check_value(&record.key, &json!("abc")).unwrap();
        assert!(!outcome.matches);
    }

    #[test]
    fn test_store_check_value_unknown_key() {
        let store = RecordStore::new(2);

        let result = store.check_value("missing", &json!(1));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_store_check_value_empty_key() {
        let store = RecordStore::new(2);

        let result = store.check_value("", &json!(1));
        assert!(matches!(result, Err(StoreError::InvalidRequest(_))));
    }

    #[test]
    fn test_store_reset() {
        let mut store = RecordStore::new(10);
        let old_keys: Vec<String> = store.list().iter().map(|r| r.key.clone()).collect();
        store.create();
        store.delete_by_key(&old_keys[0]).unwrap();
        store.delete_by_key(&old_keys[1]).unwrap();

        let count = store.reset();

        assert_eq!(count, 10);
        assert_eq!(store.len(), 10);
        assert!(store.list().iter().all(|r| !old_keys.contains(&r.key)));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(7)), Some(7.0));
        assert_eq!(coerce_number(&json!(7.5)), Some(7.5));
        assert_eq!(coerce_number(&json!(" 12 ")), Some(12.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!(false)), Some(0.0));
        assert_eq!(coerce_number(&json!("x1")), None);
        assert_eq!(coerce_number(&json!({"a": 1})), None);
        assert_eq!(coerce_number(&json!(null)), Some(0.0));
    }

    #[test]
    fn test_coerce_number_radix_strings() {
        assert_eq!(coerce_number(&json!("0x173")), Some(371.0));
        assert_eq!(coerce_number(&json!("0X173")), Some(371.0));
        assert_eq!(coerce_number(&json!("0o563")), Some(371.0));
        assert_eq!(coerce_number(&json!("0b101110011")), Some(371.0));
        assert_eq!(coerce_number(&json!("0x")), None);
        assert_eq!(coerce_number(&json!("0x1g")), None);
        assert_eq!(coerce_number(&json!("-0x10")), None);
    }

    #[test]
    fn test_coerce_number_arrays() {
        assert_eq!(coerce_number(&json!([371])), Some(371.0));
        assert_eq!(coerce_number(&json!(["371"])), Some(371.0));
        assert_eq!(coerce_number(&json!([[371]])), Some(371.0));
        assert_eq!(coerce_number(&json!([])), Some(0.0));
        assert_eq!(coerce_number(&json!([null])), Some(0.0));
        assert_eq!(coerce_number(&json!([true])), None);
        assert_eq!(coerce_number(&json!([1, 2])), None);
    }

    #[test]
    fn test_coerce_number_infinity_spellings() {
        assert_eq!(coerce_number(&json!("Infinity")), Some(f64::INFINITY));
        assert_eq!(coerce_number(&json!("-Infinity")), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number(&json!("inf")), None);
        assert_eq!(coerce_number(&json!("infinity")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&json!(".5")), Some(0.5));
    }

    #[test]
    fn test_store_check_value_js_forms_match() {
        let store = RecordStore::new(1);
        let record = store.list()[0].clone();

        for received in [
            json!(format!("0x{:x}", record.value)),
            json!([record.value]),
            json!([record.value.to_string()]),
        ] {
            let outcome = store.check_value(&record.key, &received).unwrap();
            assert!(outcome.matches, "{} should match {}", received, record.value);
        }

        let outcome = store.check_value(&record.key, &json!(null)).unwrap();
        assert!(!outcome.matches);
    }

    #[test]
    fn test_store_not_found_messages() {
        let mut store = RecordStore::new(1);

        let deleted = store.delete_by_key("nope");
        assert_eq!(
            deleted,
            Err(StoreError::NotFound(DELETE_NOT_FOUND.to_string()))
        );

        let checked = store.check_value("nope", &json!(1));
        assert_eq!(checked, Err(StoreError::NotFound(CHECK_NOT_FOUND.to_string())));
    }
}
