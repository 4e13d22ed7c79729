//! Preference rankings over shops and items.
//!
//! Ties are broken by first occurrence: among values with equal counts, the
//! one whose first record comes earlier in insertion order ranks higher. This
//! is guaranteed by counting into [`FrequencyTable`], which keeps its rows in
//! first-seen order, and then sorting with a stable sort.

use shared::{DrinkRecord, FrequencyEntry, RankField};
use std::collections::HashMap;

/// Counter whose rows stay in the order each key was first seen
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    rows: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    pub fn increment(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.rows[i].count += 1,
            None => {
                self.index.insert(name.to_string(), self.rows.len());
                self.rows.push(FrequencyEntry {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Rows sorted by descending count, first-seen order among ties
    pub fn into_ranked(self) -> Vec<FrequencyEntry> {
        let mut rows = self.rows;
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}

/// Rank every distinct value of `field`, most frequent first
pub fn rank(records: &[DrinkRecord], field: RankField) -> Vec<FrequencyEntry> {
    let mut table = FrequencyTable::default();
    for record in records {
        table.increment(field.value_of(record));
    }
    table.into_ranked()
}

/// The most frequent value of `field`, or the no-data sentinel (`count == 0`)
pub fn top(records: &[DrinkRecord], field: RankField) -> FrequencyEntry {
    rank(records, field)
        .into_iter()
        .next()
        .unwrap_or_else(FrequencyEntry::no_data)
}
