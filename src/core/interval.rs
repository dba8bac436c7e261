//! # Interval expansion & marked dates
//!
//! Turns an ordered (start, end) pair into the full list of rental days and
//! the per-day style map the calendar widget renders. The map is rebuilt
//! whole on every selection change; patching it incrementally is how stale
//! keys sneak in.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// App palette, mirrored by the calendar theme.
pub mod palette {
    /// Solid marker for the interval boundaries.
    pub const MAIN: &str = "#DC1637";
    /// Light fill for the days in between.
    pub const MAIN_LIGHT: &str = "#FDEDEF";
}

/// Where a day sits inside the selected interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMarker {
    Start,
    End,
    Period,
}

/// Style descriptor for one marked day, in the shape the calendar widget
/// looks up by date key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DayStyle {
    pub color: &'static str,
    #[serde(rename = "textColor")]
    pub text_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(rename = "disableTouchEvent", skip_serializing_if = "Option::is_none")]
    pub disable_touch_event: Option<bool>,
}

impl DayStyle {
    pub fn for_marker(marker: DayMarker) -> Self {
        match marker {
            // Boundaries get the solid marker, interior days the light fill.
            DayMarker::Start | DayMarker::End => DayStyle {
                color: palette::MAIN,
                text_color: palette::MAIN_LIGHT,
                disabled: None,
                disable_touch_event: None,
            },
            DayMarker::Period => DayStyle {
                color: palette::MAIN_LIGHT,
                text_color: palette::MAIN,
                disabled: None,
                disable_touch_event: None,
            },
        }
    }
}

/// Per-day style lookup keyed by ISO date string.
///
/// A `BTreeMap` on purpose: ISO strings sort chronologically, and the
/// checkout screen reads the first and last key as the rental boundaries.
pub type MarkedDateMap = BTreeMap<String, DayStyle>;

/// Every calendar day from `start` to `end` inclusive, in order.
///
/// Callers normalize first so `start <= end`; equal boundaries yield a
/// single-element interval.
pub fn expand_interval(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    debug_assert!(start <= end, "interval boundaries must be normalized");
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Builds the style map for an expanded interval: first day marked as the
/// range start, last as the range end, everything between as period fill.
/// A one-day interval carries the start style only.
pub fn mark_interval(days: &[NaiveDate]) -> MarkedDateMap {
    let mut marked = MarkedDateMap::new();
    let last = days.len().saturating_sub(1);
    for (i, day) in days.iter().enumerate() {
        let marker = if i == 0 {
            DayMarker::Start
        } else if i == last {
            DayMarker::End
        } else {
            DayMarker::Period
        };
        marked.insert(day.format("%Y-%m-%d").to_string(), DayStyle::for_marker(marker));
    }
    marked
}
