//! # Day events & the platform date adapter
//!
//! The calendar widget reports taps as a [`DayEvent`]: an ISO `YYYY-MM-DD`
//! string (the canonical identity of a day), the decomposed day/month/year
//! fields, and a midnight timestamp used only for ordering comparisons.
//!
//! Date strings are parsed as plain calendar dates (`NaiveDate`), never
//! through a timezone, so a day can't shift by one when the device sits
//! behind UTC. `parse_day` / `format_day` are the single conversion point
//! shared by the selection engine and the checkout screen.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Display format for rental period boundaries.
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// ISO format used as the canonical day identity and as map keys.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// One calendar-day tap reported by the calendar widget.
///
/// `date_string` is authoritative; the decomposed fields and `timestamp`
/// are derived from it in [`DayEvent::from_date`] and must stay consistent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DayEvent {
    #[serde(rename = "dateString")]
    pub date_string: String,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// Epoch milliseconds at midnight of the day. Ordering only — two
    /// events compare the way their calendar days do.
    pub timestamp: i64,
}

impl DayEvent {
    /// Builds an event from a calendar date, deriving every field so the
    /// consistency invariant (same day ⇒ same timestamp) holds by
    /// construction.
    pub fn from_date(date: NaiveDate) -> Self {
        DayEvent {
            date_string: date.format(ISO_FORMAT).to_string(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
            timestamp: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
        }
    }

    /// The calendar date this event identifies.
    pub fn date(&self) -> Result<NaiveDate, DayParseError> {
        parse_day(&self.date_string)
    }
}

/// A date string that could not be read as `YYYY-MM-DD`.
///
/// Day events normally originate from the calendar widget and are
/// well-formed, but the parse is checked anyway rather than panicking on
/// hostile input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayParseError {
    pub input: String,
}

impl fmt::Display for DayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid day string: {:?} (expected YYYY-MM-DD)", self.input)
    }
}

impl std::error::Error for DayParseError {}

/// Parses an ISO `YYYY-MM-DD` string into a plain calendar date.
pub fn parse_day(s: &str) -> Result<NaiveDate, DayParseError> {
    NaiveDate::parse_from_str(s, ISO_FORMAT).map_err(|_| DayParseError {
        input: s.to_string(),
    })
}

/// Formats a calendar date for display, `dd/MM/yyyy`.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a `dd/MM/yyyy` display string back into a calendar date.
pub fn parse_display_day(s: &str) -> Result<NaiveDate, DayParseError> {
    NaiveDate::parse_from_str(s, DISPLAY_FORMAT).map_err(|_| DayParseError {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_date_fields_consistent() {
        let event = DayEvent::from_date(date(2024, 3, 10));
        assert_eq!(event.date_string, "2024-03-10");
        assert_eq!(event.day, 10);
        assert_eq!(event.month, 3);
        assert_eq!(event.year, 2024);
        assert_eq!(event.date().unwrap(), date(2024, 3, 10));
    }

    #[test]
    fn test_timestamp_orders_like_dates() {
        let a = DayEvent::from_date(date(2024, 3, 10));
        let b = DayEvent::from_date(date(2024, 3, 11));
        assert!(a.timestamp < b.timestamp);

        // Same day, same timestamp.
        let a2 = DayEvent::from_date(date(2024, 3, 10));
        assert_eq!(a.timestamp, a2.timestamp);
    }

    #[test]
    fn test_format_day_display() {
        assert_eq!(format_day(date(2024, 3, 10)), "10/03/2024");
        assert_eq!(format_day(date(2024, 11, 3)), "03/11/2024");
    }

    #[test]
    fn test_display_round_trip_across_century() {
        // parse(format(d)) == d for days spread across 2000-01-01..=2100-12-31
        let mut d = date(2000, 1, 1);
        let end = date(2100, 12, 31);
        while d <= end {
            assert_eq!(parse_display_day(&format_day(d)).unwrap(), d);
            d = d + chrono::Days::new(97); // coarse stride keeps the test fast
        }
        assert_eq!(parse_display_day(&format_day(end)).unwrap(), end);
    }

    #[test]
    fn test_parse_day_rejects_malformed_input() {
        assert!(parse_day("10/03/2024").is_err());
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("not a date").is_err());
        assert!(parse_day("").is_err());
    }
}
