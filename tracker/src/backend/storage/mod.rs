//! # Storage Module
//!
//! Handles persistence of the record collection and shop catalog.
//!
//! The domain layer depends only on [`KeyValueStorage`]; the shipped backends
//! are a directory of JSON files (one file per key) and an in-memory map.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{JsonConnection, JsonKeyValueRepository};
pub use memory::MemoryKeyValueStore;
pub use traits::KeyValueStorage;
