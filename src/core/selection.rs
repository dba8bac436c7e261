//! # Selection state & the day-tap transition
//!
//! The scheduling screen owns one [`SelectionState`] and feeds every
//! calendar tap through [`SelectionState::handle_day_selected`]. Nothing
//! else mutates it, which keeps the transition a pure, unit-testable
//! function of (previous state, tap).
//!
//! ```text
//! SelectionState + DayEvent  →  handle_day_selected()  →  new SelectionState
//! ```
//!
//! One quirk is deliberate: after each tap the *normalized end* becomes the
//! anchor for the next range, not the original start. Tapping 10 → 13 → 11
//! therefore selects 11..=13, because the third tap ranges against 13. This
//! matches the shipped behavior and is kept as-is.

use log::debug;

use super::day::{DayEvent, DayParseError, format_day};
use super::interval::{MarkedDateMap, expand_interval, mark_interval};

/// The formatted (start, end) display pair derived from a selection,
/// `dd/MM/yyyy` on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalPeriod {
    pub start_formatted: String,
    pub end_formatted: String,
}

/// Screen-lifetime selection state. Rebuilt from scratch on every tap;
/// dropped when the screen goes away.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Anchor for the next range: the normalized end of the last one.
    pub last_selected: Option<DayEvent>,
    /// Style lookup handed to the calendar widget. Keys iterate
    /// chronologically.
    pub marked_dates: MarkedDateMap,
    /// Present once at least one tap has landed.
    pub rental_period: Option<RentalPeriod>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one calendar tap.
    ///
    /// The previous anchor (if any) and the tap form a provisional
    /// (start, end) pair, swapped into chronological order when needed; a
    /// first tap ranges against itself. The interval is then expanded to
    /// every day in between, restyled, and reformatted. Ties (re-tapping
    /// the anchor) degenerate to a one-day range.
    pub fn handle_day_selected(&mut self, tap: DayEvent) -> Result<(), DayParseError> {
        let mut start = match &self.last_selected {
            Some(prev) => prev.clone(),
            None => tap.clone(),
        };
        let mut end = tap;

        if start.timestamp > end.timestamp {
            std::mem::swap(&mut start, &mut end);
        }

        let days = expand_interval(start.date()?, end.date()?);
        debug!(
            "day selected: {} -> {} ({} days)",
            start.date_string,
            end.date_string,
            days.len()
        );

        // Guaranteed non-empty: the interval always contains its boundaries.
        let first = days[0];
        let last = days[days.len() - 1];

        self.marked_dates = mark_interval(&days);
        self.rental_period = Some(RentalPeriod {
            start_formatted: format_day(first),
            end_formatted: format_day(last),
        });
        self.last_selected = Some(end);
        Ok(())
    }

    /// The selected days as ISO date strings, chronological. Empty before
    /// the first tap.
    pub fn selected_dates(&self) -> Vec<String> {
        self.marked_dates.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interval::{DayMarker, DayStyle};
    use chrono::NaiveDate;

    fn tap(y: i32, m: u32, d: u32) -> DayEvent {
        DayEvent::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_first_tap_selects_single_day() {
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();

        assert_eq!(state.selected_dates(), vec!["2024-03-10"]);
        assert_eq!(
            state.marked_dates["2024-03-10"],
            DayStyle::for_marker(DayMarker::Start)
        );
        let period = state.rental_period.as_ref().unwrap();
        assert_eq!(period.start_formatted, "10/03/2024");
        assert_eq!(period.end_formatted, "10/03/2024");
    }

    #[test]
    fn test_two_taps_expand_the_full_interval() {
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();
        state.handle_day_selected(tap(2024, 3, 13)).unwrap();

        assert_eq!(
            state.selected_dates(),
            vec!["2024-03-10", "2024-03-11", "2024-03-12", "2024-03-13"]
        );
        let period = state.rental_period.as_ref().unwrap();
        assert_eq!(period.start_formatted, "10/03/2024");
        assert_eq!(period.end_formatted, "13/03/2024");
    }

    #[test]
    fn test_reverse_tap_order_normalizes_to_same_interval() {
        let mut forward = SelectionState::new();
        forward.handle_day_selected(tap(2024, 3, 10)).unwrap();
        forward.handle_day_selected(tap(2024, 3, 13)).unwrap();

        let mut reverse = SelectionState::new();
        reverse.handle_day_selected(tap(2024, 3, 13)).unwrap();
        reverse.handle_day_selected(tap(2024, 3, 10)).unwrap();

        assert_eq!(forward.selected_dates(), reverse.selected_dates());
        assert_eq!(forward.rental_period, reverse.rental_period);
    }

    #[test]
    fn test_retapping_the_same_day_stays_a_one_day_range() {
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();

        assert_eq!(state.selected_dates(), vec!["2024-03-10"]);
    }

    #[test]
    fn test_third_tap_ranges_against_the_last_end() {
        // 10 → 13 selects 10..=13 and anchors on 13; tapping 11 next
        // ranges 11..=13, not 10..=11.
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();
        state.handle_day_selected(tap(2024, 3, 13)).unwrap();
        state.handle_day_selected(tap(2024, 3, 11)).unwrap();

        assert_eq!(
            state.selected_dates(),
            vec!["2024-03-11", "2024-03-12", "2024-03-13"]
        );
        assert_eq!(
            state.last_selected.as_ref().unwrap().date_string,
            "2024-03-13"
        );
    }

    #[test]
    fn test_anchor_is_the_normalized_end() {
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 13)).unwrap();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();

        // 13 came first but the normalized end is still 13.
        assert_eq!(
            state.last_selected.as_ref().unwrap().date_string,
            "2024-03-13"
        );
    }

    #[test]
    fn test_marked_dates_rebuilt_not_patched() {
        let mut state = SelectionState::new();
        state.handle_day_selected(tap(2024, 3, 10)).unwrap();
        state.handle_day_selected(tap(2024, 3, 13)).unwrap();
        state.handle_day_selected(tap(2024, 3, 20)).unwrap();

        // A fresh range from the old end; none of the old interior keys
        // survive except those inside the new interval.
        assert_eq!(state.selected_dates().first().unwrap(), "2024-03-13");
        assert_eq!(state.selected_dates().last().unwrap(), "2024-03-20");
        assert!(!state.marked_dates.contains_key("2024-03-10"));
    }
}
