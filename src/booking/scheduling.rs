//! # Scheduling screen controller
//!
//! Owns the [`SelectionState`] for one car, forwards calendar taps into
//! it, and gates the hand-off to checkout: no interval, no navigation.

use std::fmt;

use chrono::NaiveDate;
use log::info;

use crate::api::Car;
use crate::core::calendar::CalendarProps;
use crate::core::day::{DayEvent, DayParseError};
use crate::core::selection::SelectionState;

/// Raised when confirm is pressed before an interval exists. Shown to the
/// user as a blocking prompt, never propagated further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationGap;

impl ValidationGap {
    /// The user-facing prompt text.
    pub const MESSAGE: &'static str = "Select an interval to rent.";
}

impl fmt::Display for ValidationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for ValidationGap {}

/// What the scheduling screen hands to checkout on a confirmed interval.
///
/// `dates` is chronological; checkout reads `dates[0]` and `dates[last]`
/// as the rental boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalHandoff {
    pub car: Car,
    pub dates: Vec<String>,
}

/// Controller for the date-picking screen.
pub struct SchedulingScreen {
    pub car: Car,
    pub selection: SelectionState,
}

impl SchedulingScreen {
    pub fn new(car: Car) -> Self {
        SchedulingScreen {
            car,
            selection: SelectionState::new(),
        }
    }

    /// Calendar tap callback.
    pub fn press_day(&mut self, tap: DayEvent) -> Result<(), DayParseError> {
        self.selection.handle_day_selected(tap)
    }

    /// Props for the calendar widget as of the current selection.
    pub fn calendar_props(&self, today: NaiveDate) -> CalendarProps {
        CalendarProps::new(self.selection.marked_dates.clone(), today)
    }

    /// Whether the confirm button should render enabled.
    pub fn can_confirm(&self) -> bool {
        self.selection
            .rental_period
            .as_ref()
            .is_some_and(|p| !p.start_formatted.is_empty() && !p.end_formatted.is_empty())
    }

    /// Confirm gate: hands the car and the selected dates to checkout, or
    /// blocks with a prompt when no interval is selected.
    pub fn confirm_rental(&self) -> Result<RentalHandoff, ValidationGap> {
        if !self.can_confirm() {
            return Err(ValidationGap);
        }

        let dates = self.selection.selected_dates();
        info!(
            "rental confirmed: car={} {} days",
            self.car.id,
            dates.len()
        );
        Ok(RentalHandoff {
            car: self.car.clone(),
            dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{tap, test_car};

    #[test]
    fn test_confirm_blocked_before_any_tap() {
        let screen = SchedulingScreen::new(test_car());
        assert!(!screen.can_confirm());
        assert_eq!(screen.confirm_rental(), Err(ValidationGap));
    }

    #[test]
    fn test_confirm_hands_off_chronological_dates() {
        let mut screen = SchedulingScreen::new(test_car());
        screen.press_day(tap(2024, 3, 10)).unwrap();
        screen.press_day(tap(2024, 3, 13)).unwrap();

        let handoff = screen.confirm_rental().unwrap();
        assert_eq!(
            handoff.dates,
            vec!["2024-03-10", "2024-03-11", "2024-03-12", "2024-03-13"]
        );
        assert_eq!(handoff.car.id, "1");
    }

    #[test]
    fn test_single_tap_is_a_confirmable_one_day_rental() {
        let mut screen = SchedulingScreen::new(test_car());
        screen.press_day(tap(2024, 3, 10)).unwrap();

        assert!(screen.can_confirm());
        let handoff = screen.confirm_rental().unwrap();
        assert_eq!(handoff.dates, vec!["2024-03-10"]);
    }

    #[test]
    fn test_validation_gap_message() {
        assert_eq!(ValidationGap.to_string(), "Select an interval to rent.");
    }

    #[test]
    fn test_calendar_props_reflect_selection() {
        let mut screen = SchedulingScreen::new(test_car());
        screen.press_day(tap(2024, 3, 10)).unwrap();
        screen.press_day(tap(2024, 3, 12)).unwrap();

        let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let props = screen.calendar_props(today);
        assert_eq!(props.marked_dates.len(), 3);
        assert_eq!(props.min_date, today);
    }
}
