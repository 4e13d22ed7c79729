//! File-backed JSON storage.
//!
//! ```text
//! data/
//! ├── config.yaml     (optional, see `TrackerConfig`)
//! ├── records.json
//! └── shops.json
//! ```

pub mod connection;
pub mod kv_repository;
#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use kv_repository::JsonKeyValueRepository;
