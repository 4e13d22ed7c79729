//! # Storage Traits
//!
//! The record store talks to durable storage only through this key-value
//! abstraction, so backends can be swapped without touching the domain layer.

use anyhow::Result;

/// Trait defining the interface for a local durable key-value store
pub trait KeyValueStorage {
    /// Retrieve the value stored under `key`, if any
    fn get_value(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, overwriting any existing value for the same key.
    /// The write must be durable when this returns.
    fn put_value(&mut self, key: &str, value: &str) -> Result<()>;
}
