use serde::{Deserialize, Serialize};
use std::fmt;

/// A single drink purchase attributed to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkRecord {
    /// Opaque identifier assigned at creation
    pub id: String,
    /// Canonical day string (YYYY-MM-DD)
    pub date: String,
    /// Vendor display name
    pub shop: String,
    /// Drink ordered
    pub item: String,
    pub sweetness: String,
    pub ice: String,
    /// Price in the smallest currency unit
    pub price: u32,
}

/// Input for creating a new drink record; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkDraft {
    pub shop: String,
    pub item: String,
    pub sweetness: String,
    pub ice: String,
    pub price: u32,
    /// Canonical day string the purchase is attributed to
    pub date: String,
}

/// Monthly and annual consumption totals for a reference year/month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkStats {
    pub monthly_count: u32,
    pub monthly_cost: u64,
    pub annual_count: u32,
    pub annual_cost: u64,
}

/// Which record field a frequency ranking groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankField {
    Shop,
    Item,
}

impl RankField {
    /// Borrow the selected field's value from a record
    pub fn value_of<'a>(&self, record: &'a DrinkRecord) -> &'a str {
        match self {
            RankField::Shop => &record.shop,
            RankField::Item => &record.item,
        }
    }
}

impl fmt::Display for RankField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankField::Shop => write!(f, "shop"),
            RankField::Item => write!(f, "item"),
        }
    }
}

/// One row of a frequency ranking.
///
/// A `count` of zero never describes a real value: it is the "no data"
/// sentinel returned when there is nothing to rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub name: String,
    pub count: u32,
}

impl FrequencyEntry {
    pub fn no_data() -> Self {
        Self::default()
    }

    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty placeholder before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Represents a calendar month with the drink records that fall on each day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    /// Iterate over the real days, skipping leading placeholders
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days
            .iter()
            .filter(|d| d.day_type == CalendarDayType::MonthDay)
    }
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for placeholders
    pub day: u32,
    /// Canonical date string, `None` for placeholders
    pub date: Option<String>,
    pub records: Vec<DrinkRecord>,
    pub day_type: CalendarDayType,
    pub is_selected: bool,
    pub is_today: bool,
    /// Number of indicator dots to render, never more than two
    pub dot_count: usize,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            date: None,
            records: Vec::new(),
            day_type: CalendarDayType::PaddingBefore,
            is_selected: false,
            is_today: false,
            dot_count: 0,
        }
    }
}

/// Everything the main screen shows for one viewed month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub month_label: String,
    pub stats: DrinkStats,
    pub favorite_shop: FrequencyEntry,
    pub favorite_item: FrequencyEntry,
    pub calendar: CalendarMonth,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DrinkRecord {
        DrinkRecord {
            id: "r1".to_string(),
            date: "2026-03-05".to_string(),
            shop: "A".to_string(),
            item: "Milk Tea".to_string(),
            sweetness: "half".to_string(),
            ice: "less".to_string(),
            price: 50,
        }
    }

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(record()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in ["id", "date", "shop", "item", "sweetness", "ice", "price"] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{"id":"x","date":"2026-03-05","shop":"A","item":"B","sweetness":"","ice":"","price":-5}"#;
        assert!(serde_json::from_str::<DrinkRecord>(json).is_err());
    }

    #[test]
    fn test_rank_field_value_of() {
        let r = record();
        assert_eq!(RankField::Shop.value_of(&r), "A");
        assert_eq!(RankField::Item.value_of(&r), "Milk Tea");
        assert_eq!(RankField::Item.to_string(), "item");
    }

    #[test]
    fn test_no_data_sentinel() {
        let entry = FrequencyEntry::no_data();
        assert_eq!(entry.count, 0);
        assert!(!entry.has_data());
    }
}
