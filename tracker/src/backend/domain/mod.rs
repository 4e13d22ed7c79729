//! # Domain Module
//!
//! Business rules of the drink tracker, independent of storage and UI.
//!
//! - **date_codec**: canonical `YYYY-MM-DD` formatting and parsing
//! - **record_store**: the record collection, shop catalog and per-day capacity rule
//! - **stats**: monthly and annual counts and spend
//! - **frequency**: shop and item rankings
//! - **calendar**: month grid and navigation helpers
//!
//! Everything except `RecordStore` is a pure function of its inputs and is
//! recomputed by the caller after each mutation.

pub mod calendar;
pub mod date_codec;
pub mod errors;
pub mod frequency;
pub mod id_generator;
pub mod record_store;
pub mod shop_catalog;
pub mod stats;

pub use calendar::CalendarService;
pub use date_codec::ParseError;
pub use errors::TrackerError;
pub use frequency::{rank, top, FrequencyTable};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use record_store::{RecordStore, DAILY_CAPACITY, RECORDS_KEY, SHOPS_KEY};
pub use shop_catalog::ShopCatalog;
pub use stats::calculate_stats;
