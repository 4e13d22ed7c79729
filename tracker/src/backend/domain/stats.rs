//! Monthly and annual consumption totals.

use shared::{DrinkRecord, DrinkStats};
use tracing::debug;

use super::date_codec::year_month;

/// Count and sum prices of records in `reference_year` and in
/// `reference_year`/`reference_month` (1-based).
///
/// Records are bucketed by the year and month parsed from their own date, so
/// records from other years never leak into the totals. Records with an
/// unparsable date are skipped.
pub fn calculate_stats(
    records: &[DrinkRecord],
    reference_year: i32,
    reference_month: u32,
) -> DrinkStats {
    let mut stats = DrinkStats::default();

    for record in records {
        let (year, month) = match year_month(&record.date) {
            Ok(ym) => ym,
            Err(e) => {
                debug!("Skipping record {} in stats: {}", record.id, e);
                continue;
            }
        };
        if year != reference_year {
            continue;
        }

        stats.annual_count += 1;
        stats.annual_cost += u64::from(record.price);
        if month == reference_month {
            stats.monthly_count += 1;
            stats.monthly_cost += u64::from(record.price);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, price: u32) -> DrinkRecord {
        DrinkRecord {
            id: format!("test_{}_{}", date, price),
            date: date.to_string(),
            shop: "A".to_string(),
            item: "Milk Tea".to_string(),
            sweetness: String::new(),
            ice: String::new(),
            price,
        }
    }

    #[test]
    fn test_month_and_year_totals() {
        let records = vec![
            record("2026-01-10", 40),
            record("2026-02-01", 60),
            record("2025-12-31", 30),
        ];

        let stats = calculate_stats(&records, 2026, 1);

        assert_eq!(
            stats,
            DrinkStats {
                monthly_count: 1,
                monthly_cost: 40,
                annual_count: 2,
                annual_cost: 100,
            }
        );
    }

    #[test]
    fn test_other_years_excluded() {
        let records = vec![record("2025-01-15", 50), record("2027-01-15", 50)];
        assert_eq!(calculate_stats(&records, 2026, 1), DrinkStats::default());
        assert_eq!(calculate_stats(&records, 2025, 1).monthly_count, 1);
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(calculate_stats(&[], 2026, 3), DrinkStats::default());
    }

    #[test]
    fn test_month_without_records_still_counts_year() {
        let records = vec![record("2026-05-01", 55), record("2026-05-02", 45)];
        let stats = calculate_stats(&records, 2026, 6);
        assert_eq!(stats.monthly_count, 0);
        assert_eq!(stats.monthly_cost, 0);
        assert_eq!(stats.annual_count, 2);
        assert_eq!(stats.annual_cost, 100);
    }

    #[test]
    fn test_unparsable_dates_skipped() {
        let records = vec![record("not-a-date", 99), record("2026-03-05", 50)];
        let stats = calculate_stats(&records, 2026, 3);
        assert_eq!(stats.monthly_count, 1);
        assert_eq!(stats.annual_cost, 50);
    }

    #[test]
    fn test_totals_match_filtered_sums() {
        let records: Vec<DrinkRecord> = (1..=28)
            .map(|day| record(&format!("2026-{:02}-{:02}", (day % 12) + 1, day), day * 10))
            .collect();

        for month in 1..=12 {
            let stats = calculate_stats(&records, 2026, month);
            let in_month: Vec<&DrinkRecord> = records
                .iter()
                .filter(|r| r.date.starts_with(&format!("2026-{:02}-", month)))
                .collect();
            assert_eq!(stats.monthly_count as usize, in_month.len());
            assert_eq!(
                stats.monthly_cost,
                in_month.iter().map(|r| u64::from(r.price)).sum::<u64>()
            );
            assert_eq!(stats.annual_count, 28);
        }
    }
}
