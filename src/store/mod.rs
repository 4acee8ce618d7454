//! Store Module
//!
//! Holds the in-memory collection of generated random numbers.

mod collection;
mod record;


// Re-export public types
pub use collection::{CheckOutcome, Removal, RecordStore};
pub use record::{generate_key, generate_value, Record};

// == Public Constants ==
/// Number of records a fresh store is seeded with
pub const DEFAULT_INITIAL_COUNT: usize = 10;

/// Smallest value a record can hold
pub const MIN_VALUE: u32 = 1;

/// Largest value a record can hold
pub const MAX_VALUE: u32 = 1000;

/// Prefix shared by every generated key
pub const KEY_PREFIX: &str = "random";

/// Length of the random base-36 suffix in generated keys
pub const KEY_SUFFIX_LENGTH: usize = 8;

/// Not-found message for deletes
pub const DELETE_NOT_FOUND: &str = "Random number with the specified key not found";

/// Not-found message for value checks
pub const CHECK_NOT_FOUND: &str = "Key not found";
