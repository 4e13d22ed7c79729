//! The authoritative collection of drink records and the shop catalog.
//!
//! `RecordStore` is constructed once per process by [`RecordStore::load`] and
//! passed by reference to whatever needs to read it. Every successful mutation
//! is written through to storage before it becomes visible in memory, so the
//! durable state always matches the last completed operation.

use serde::de::DeserializeOwned;
use shared::{DrinkDraft, DrinkRecord};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use super::date_codec::parse_date;
use super::errors::TrackerError;
use super::id_generator::IdGenerator;
use super::shop_catalog::ShopCatalog;
use crate::backend::storage::KeyValueStorage;

pub const RECORDS_KEY: &str = "records";
pub const SHOPS_KEY: &str = "shops";

/// Maximum number of records a single calendar day may hold
pub const DAILY_CAPACITY: usize = 2;

const MAX_ID_ATTEMPTS: usize = 8;

pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    records: Vec<DrinkRecord>,
    shops: ShopCatalog,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Restore the store from `storage`.
    ///
    /// Missing or unreadable entries fall back to an empty record list and
    /// the `default_shops` catalog; this never fails.
    pub fn load(storage: S, ids: Box<dyn IdGenerator>, default_shops: &[String]) -> Self {
        let records = read_json::<Vec<DrinkRecord>>(&storage, RECORDS_KEY)
            .map(sanitize_records)
            .unwrap_or_default();
        let shops = read_json::<Vec<String>>(&storage, SHOPS_KEY)
            .map(ShopCatalog::from_names)
            .unwrap_or_else(|| ShopCatalog::from_names(default_shops.iter().cloned()));

        info!(
            "Loaded {} drink records and {} shops",
            records.len(),
            shops.len()
        );

        Self {
            storage,
            ids,
            records,
            shops,
        }
    }

    /// Record a new purchase.
    pub fn add(&mut self, draft: DrinkDraft) -> Result<DrinkRecord, TrackerError> {
        parse_date(&draft.date)?;
        let shop = draft.shop.trim();
        let item = draft.item.trim();
        if shop.is_empty() {
            return Err(TrackerError::EmptyField("shop"));
        }
        if item.is_empty() {
            return Err(TrackerError::EmptyField("item"));
        }
        if !self.has_room(&draft.date) {
            warn!("🚫 {} is full, rejecting {} from {}", draft.date, item, shop);
            return Err(TrackerError::CapacityExceeded {
                date: draft.date,
                limit: DAILY_CAPACITY,
            });
        }

        let record = DrinkRecord {
            id: self.fresh_id()?,
            date: draft.date,
            shop: shop.to_string(),
            item: item.to_string(),
            sweetness: draft.sweetness,
            ice: draft.ice,
            price: draft.price,
        };

        let mut records = self.records.clone();
        records.push(record.clone());
        let mut shops = self.shops.clone();
        if shops.insert(record.shop.clone()) {
            info!("🏪 New shop added to catalog: {}", record.shop);
        }

        Self::persist(&mut self.storage, &self.records, &records, &shops)?;
        self.records = records;
        self.shops = shops;

        info!(
            "🥤 Added {} ({}) on {} for {}",
            record.item, record.shop, record.date, record.price
        );
        Ok(record)
    }

    /// Delete the record with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub fn remove(&mut self, id: &str) -> Result<bool, TrackerError> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            debug!("remove: no record with id {}", id);
            return Ok(false);
        };

        let mut records = self.records.clone();
        let removed = records.remove(index);
        Self::persist(&mut self.storage, &self.records, &records, &self.shops)?;
        self.records = records;

        info!("🗑️ Removed {} on {}", removed.id, removed.date);
        Ok(true)
    }

    /// Records on `date`, in insertion order
    pub fn records_on(&self, date: &str) -> Vec<&DrinkRecord> {
        self.records.iter().filter(|r| r.date == date).collect()
    }

    /// All records, in insertion order
    pub fn all_records(&self) -> &[DrinkRecord] {
        &self.records
    }

    pub fn shops(&self) -> &[String] {
        self.shops.names()
    }

    pub fn remaining_capacity(&self, date: &str) -> usize {
        DAILY_CAPACITY.saturating_sub(self.records_on(date).len())
    }

    /// Whether another record may be added on `date`
    pub fn has_room(&self, date: &str) -> bool {
        self.remaining_capacity(date) > 0
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the underlying storage, e.g. to reload from it
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn fresh_id(&mut self) -> Result<String, TrackerError> {
        let mut last = String::new();
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !self.records.iter().any(|r| r.id == id) {
                return Ok(id);
            }
            last = id;
        }
        Err(TrackerError::DuplicateId(last))
    }

    /// Write `records` then `shops`. If the second write fails the records
    /// entry is put back to `previous` so storage never runs ahead of memory.
    fn persist(
        storage: &mut S,
        previous: &[DrinkRecord],
        records: &[DrinkRecord],
        shops: &ShopCatalog,
    ) -> Result<(), TrackerError> {
        let records_json = serde_json::to_string(records).map_err(anyhow::Error::from)?;
        let shops_json = serde_json::to_string(shops).map_err(anyhow::Error::from)?;
        storage.put_value(RECORDS_KEY, &records_json)?;

        if let Err(e) = storage.put_value(SHOPS_KEY, &shops_json) {
            let rollback = serde_json::to_string(previous)
                .map_err(anyhow::Error::from)
                .and_then(|previous_json| storage.put_value(RECORDS_KEY, &previous_json));
            if let Err(rollback_err) = rollback {
                warn!("Failed to restore '{}' after a failed write: {:#}", RECORDS_KEY, rollback_err);
            }
            return Err(e.into());
        }
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(storage: &impl KeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.get_value(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No persisted value for '{}'", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read '{}', using default: {:#}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Persisted '{}' is corrupt, using default: {}", key, e);
            None
        }
    }
}

/// Drop loaded records that would break the store's invariants: non-canonical
/// dates, repeated ids, and records beyond a day's capacity.
fn sanitize_records(records: Vec<DrinkRecord>) -> Vec<DrinkRecord> {
    let mut seen_ids = HashSet::new();
    let mut per_day: HashMap<String, usize> = HashMap::new();

    records
        .into_iter()
        .filter(|record| {
            if let Err(e) = parse_date(&record.date) {
                warn!("Dropping record {}: {}", record.id, e);
                return false;
            }
            if !seen_ids.insert(record.id.clone()) {
                warn!("Dropping record with duplicate id {}", record.id);
                return false;
            }
            let count = per_day.entry(record.date.clone()).or_insert(0);
            if *count >= DAILY_CAPACITY {
                warn!("Dropping record {}: {} is over capacity", record.id, record.date);
                return false;
            }
            *count += 1;
            true
        })
        .collect()
}
