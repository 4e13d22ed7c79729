//! Calendar domain logic for the drink tracker.
//!
//! This module builds the month grid shown on the main screen and the small
//! date helpers around it (navigation, labels). The UI only renders what it
//! gets from here.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarDay, CalendarDayType, CalendarMonth};
use tracing::debug;

use super::date_codec::{self, format_date};
use super::errors::TrackerError;
use super::record_store::{RecordStore, DAILY_CAPACITY};
use crate::backend::storage::KeyValueStorage;

/// Calendar service that handles all calendar-related logic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a calendar month with each day's drink records.
    ///
    /// `selected` is the caller's currently selected canonical date, if any.
    /// "Today" is taken from the local clock.
    pub fn generate_calendar_month<S: KeyValueStorage>(
        &self,
        year: i32,
        month: u32,
        store: &RecordStore<S>,
        selected: Option<&str>,
    ) -> Result<CalendarMonth, TrackerError> {
        self.generate_calendar_month_at(year, month, store, selected, date_codec::today())
    }

    /// Same as [`Self::generate_calendar_month`] with an explicit "today"
    pub fn generate_calendar_month_at<S: KeyValueStorage>(
        &self,
        year: i32,
        month: u32,
        store: &RecordStore<S>,
        selected: Option<&str>,
        today: NaiveDate,
    ) -> Result<CalendarMonth, TrackerError> {
        let first = first_of_month(year, month)?;
        let first_day = first.weekday().num_days_from_sunday();
        let days_in_month = self.days_in_month(year, month)?;

        debug!(
            "🗓️ Generating calendar for {}/{}: {} days, first weekday {}",
            year, month, days_in_month, first_day
        );

        let mut days: Vec<CalendarDay> = (0..first_day).map(|_| CalendarDay::padding()).collect();

        for date in first.iter_days().take(days_in_month as usize) {
            let date_str = format_date(date);
            let records: Vec<_> = store.records_on(&date_str).into_iter().cloned().collect();
            days.push(CalendarDay {
                day: date.day(),
                is_selected: selected == Some(date_str.as_str()),
                is_today: date_codec::is_today(&date_str, today),
                dot_count: records.len().min(DAILY_CAPACITY),
                records,
                date: Some(date_str),
                day_type: CalendarDayType::MonthDay,
            });
        }

        Ok(CalendarMonth {
            year,
            month,
            days,
            first_day_of_week: first_day,
        })
    }

    /// Number of days in a month, found as "day 0" of the following month
    /// (the day before its first), so leap years need no special case.
    pub fn days_in_month(&self, year: i32, month: u32) -> Result<u32, TrackerError> {
        first_of_month(year, month)?;
        let (next_year, next_month) = self.next_month(year, month)?;
        first_of_month(next_year, next_month)
            .map_err(|_| TrackerError::InvalidYear(year))?
            .pred_opt()
            .map(|last| last.day())
            .ok_or(TrackerError::InvalidYear(year))
    }

    /// Weekday of the first of the month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, year: i32, month: u32) -> Result<u32, TrackerError> {
        Ok(first_of_month(year, month)?.weekday().num_days_from_sunday())
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, year: i32, month: u32) -> Result<(i32, u32), TrackerError> {
        match month {
            1 => year
                .checked_sub(1)
                .map(|year| (year, 12))
                .ok_or(TrackerError::InvalidYear(year)),
            2..=12 => Ok((year, month - 1)),
            _ => Err(TrackerError::InvalidMonth(month)),
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, year: i32, month: u32) -> Result<(i32, u32), TrackerError> {
        match month {
            12 => year
                .checked_add(1)
                .map(|year| (year, 1))
                .ok_or(TrackerError::InvalidYear(year)),
            1..=11 => Ok((year, month + 1)),
            _ => Err(TrackerError::InvalidMonth(month)),
        }
    }

    /// Header label for the month view, e.g. "2026 / 01"
    pub fn month_label(&self, year: i32, month: u32) -> String {
        format!("{} / {:02}", year, month)
    }

    /// Heading for the selected-day panel, e.g. "Thursday, March 5"
    pub fn format_day_heading(&self, date: &str) -> Result<String, TrackerError> {
        let date = date_codec::parse_date(date)?;
        Ok(date.format("%A, %B %-d").to_string())
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, TrackerError> {
    if !(1..=12).contains(&month) {
        return Err(TrackerError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(TrackerError::InvalidYear(year))
}
