//! # Backend Module
//!
//! Contains all non-UI logic for the drink tracker.
//!
//! ```text
//! UI (entry form, stat cards, calendar, ranking list)
//!     ↓
//! TrackerApp
//!     ↓
//! Domain (RecordStore, stats, frequency, calendar)
//!     ↓
//! Storage (KeyValueStorage: JSON files / memory)
//! ```
//!
//! `TrackerApp` is built once per process by [`initialize_backend`] and owns
//! the only `RecordStore`. Views are recomputed from it explicitly after each
//! mutation; nothing is cached.

pub mod domain;
pub mod storage;

use anyhow::Result;
use shared::{Dashboard, DrinkDraft, DrinkRecord, FrequencyEntry, RankField};
use tracing::info;

use crate::config::TrackerConfig;
use domain::{calculate_stats, frequency, CalendarService, RecordStore, TrackerError, UuidGenerator};
use storage::{JsonConnection, JsonKeyValueRepository, KeyValueStorage};

/// Main application state
pub struct TrackerApp<S: KeyValueStorage = JsonKeyValueRepository> {
    store: RecordStore<S>,
    calendar_service: CalendarService,
}

/// Install logging, open the configured data directory and load the record
/// store from it
pub fn initialize_backend(config: &TrackerConfig) -> Result<TrackerApp> {
    crate::logging::init_logging(&config.log_filter);

    info!("Setting up storage in {}", config.data_directory.display());
    let connection = JsonConnection::from_config(config)?;
    let repository = JsonKeyValueRepository::new(connection);

    info!("Loading record store");
    let store = RecordStore::load(repository, Box::new(UuidGenerator), &config.default_shops);

    Ok(TrackerApp::new(store))
}

impl<S: KeyValueStorage> TrackerApp<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            calendar_service: CalendarService::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn calendar_service(&self) -> &CalendarService {
        &self.calendar_service
    }

    pub fn add_record(&mut self, draft: DrinkDraft) -> Result<DrinkRecord, TrackerError> {
        self.store.add(draft)
    }

    pub fn remove_record(&mut self, id: &str) -> Result<bool, TrackerError> {
        self.store.remove(id)
    }

    /// Recompute everything the main screen shows for `year`/`month`
    pub fn dashboard(
        &self,
        year: i32,
        month: u32,
        selected: Option<&str>,
    ) -> Result<Dashboard, TrackerError> {
        let records = self.store.all_records();
        Ok(Dashboard {
            month_label: self.calendar_service.month_label(year, month),
            stats: calculate_stats(records, year, month),
            favorite_shop: frequency::top(records, RankField::Shop),
            favorite_item: frequency::top(records, RankField::Item),
            calendar: self
                .calendar_service
                .generate_calendar_month(year, month, &self.store, selected)?,
        })
    }

    /// Full ranking for the detailed analytics view
    pub fn ranking(&self, field: RankField) -> Vec<FrequencyEntry> {
        frequency::rank(self.store.all_records(), field)
    }
}
