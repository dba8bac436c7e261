//! # Calendar widget contract
//!
//! The widget itself lives outside this crate; these are the props it
//! consumes and the callback shape it fires. Marking type is "period" so
//! start/middle/end days render distinctly, the floor is today, and weeks
//! start on Monday.

use chrono::NaiveDate;
use serde::Serialize;

use super::day::DayEvent;
use super::interval::MarkedDateMap;

/// Weekday the calendar opens each row with.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstDay {
    #[serde(rename = "1")]
    Monday,
}

/// Props handed to the calendar widget on each render.
#[derive(Serialize, Debug, Clone)]
pub struct CalendarProps {
    #[serde(rename = "markedDates")]
    pub marked_dates: MarkedDateMap,
    #[serde(rename = "markingType")]
    pub marking_type: &'static str,
    /// Days before this are untappable.
    #[serde(rename = "minDate")]
    pub min_date: NaiveDate,
    #[serde(rename = "firstDay")]
    pub first_day: FirstDay,
}

impl CalendarProps {
    pub fn new(marked_dates: MarkedDateMap, today: NaiveDate) -> Self {
        CalendarProps {
            marked_dates,
            marking_type: "period",
            min_date: today,
            first_day: FirstDay::Monday,
        }
    }
}

/// Callback signature the widget invokes on each day tap.
pub type DayPressHandler<'a> = dyn FnMut(DayEvent) + 'a;
