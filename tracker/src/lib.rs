//! # Drink Tracker
//!
//! Record store and analytics engine for a personal drink-purchase log.
//! Purchases are logged against calendar days (at most two per day) and the
//! crate derives monthly/annual spend, favourite shops and items, and the
//! month calendar grid.

pub mod backend;
pub mod config;
pub mod logging;

pub use backend::{initialize_backend, TrackerApp};
pub use config::TrackerConfig;
