//! # Checkout screen controller
//!
//! Prices the confirmed interval and submits the booking. Submission is a
//! four-step sequence against the backend:
//!
//! 1. fetch the car's existing unavailable dates
//! 2. union them with the newly selected dates
//! 3. create the booking record
//! 4. write the unioned set back
//!
//! The steps are not transactional. A failure aborts whatever remains but
//! rolls nothing back, so the booking record can exist while the
//! availability write never landed. The backend is assumed to serialize
//! writes per car; otherwise concurrent checkouts of the same car can
//! double-book.

use std::fmt;

use log::{info, warn};
use rust_decimal::Decimal;

use crate::api::{ApiClient, ApiError, BookingRequest, CarSchedule};
use crate::booking::scheduling::RentalHandoff;
use crate::core::day::{DayParseError, format_day, parse_day};
use crate::core::pricing::rent_total;
use crate::core::selection::RentalPeriod;

/// Failures surfaced by the checkout flow.
#[derive(Debug)]
pub enum CheckoutError {
    /// A selected date string didn't parse; should not happen for dates
    /// that came from the calendar.
    BadDate(DayParseError),
    /// One of the backend calls failed. Names which step died so partial
    /// completion is at least diagnosable.
    Api { step: SagaStep, source: ApiError },
}

/// The backend steps of the submission sequence, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SagaStep {
    FetchSchedule,
    CreateBooking,
    UpdateSchedule,
}

impl fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutError::BadDate(e) => write!(f, "bad rental date: {e}"),
            CheckoutError::Api { step, source } => {
                write!(f, "booking failed at {step:?}: {source}")
            }
        }
    }
}

impl std::error::Error for CheckoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckoutError::BadDate(e) => Some(e),
            CheckoutError::Api { source, .. } => Some(source),
        }
    }
}

impl From<DayParseError> for CheckoutError {
    fn from(e: DayParseError) -> Self {
        CheckoutError::BadDate(e)
    }
}

/// Controller for the checkout screen. Receives the confirmed hand-off
/// and the booking user; everything else derives from those.
pub struct CheckoutScreen {
    pub handoff: RentalHandoff,
    pub user_id: u64,
    /// Spinner flag for the confirm button. Cleared on failure so the
    /// screen stops loading; there is no retry.
    pub loading: bool,
}

impl CheckoutScreen {
    pub fn new(handoff: RentalHandoff, user_id: u64) -> Self {
        CheckoutScreen {
            handoff,
            user_id,
            loading: false,
        }
    }

    fn boundary_dates(&self) -> Result<(String, String), DayParseError> {
        // Hand-off dates are chronological; first and last are the rental
        // boundaries.
        let dates = &self.handoff.dates;
        let start = parse_day(&dates[0])?;
        let end = parse_day(&dates[dates.len() - 1])?;
        Ok((format_day(start), format_day(end)))
    }

    /// The display pair for the period summary, `dd/MM/yyyy`.
    pub fn rental_period(&self) -> Result<RentalPeriod, DayParseError> {
        let (start_formatted, end_formatted) = self.boundary_dates()?;
        Ok(RentalPeriod {
            start_formatted,
            end_formatted,
        })
    }

    /// Daily price times the number of selected days, exact.
    pub fn rent_total(&self) -> Decimal {
        rent_total(self.handoff.car.rent.price, self.handoff.dates.len())
    }

    /// Runs the submission sequence. Each call awaits the previous one;
    /// the first failure aborts the rest and clears the loading flag.
    pub async fn confirm(&mut self, client: &ApiClient) -> Result<(), CheckoutError> {
        self.loading = true;
        let result = self.submit(client).await;
        if let Err(ref e) = result {
            warn!("checkout aborted: {e}");
            self.loading = false;
        }
        result
    }

    async fn submit(&self, client: &ApiClient) -> Result<(), CheckoutError> {
        let car = &self.handoff.car;

        let schedule = client
            .car_schedule(&car.id)
            .await
            .map_err(|source| CheckoutError::Api {
                step: SagaStep::FetchSchedule,
                source,
            })?;

        let unavailable_dates = union_dates(schedule.unavailable_dates, &self.handoff.dates);

        let (start_date, end_date) = self.boundary_dates()?;
        let booking = BookingRequest {
            user_id: self.user_id,
            car: car.clone(),
            start_date,
            end_date,
        };
        client
            .create_booking(&booking)
            .await
            .map_err(|source| CheckoutError::Api {
                step: SagaStep::CreateBooking,
                source,
            })?;

        client
            .update_car_schedule(&CarSchedule {
                id: car.id.clone(),
                unavailable_dates,
            })
            .await
            .map_err(|source| CheckoutError::Api {
                step: SagaStep::UpdateSchedule,
                source,
            })?;

        info!(
            "booking submitted: car={} user={} {} days",
            car.id,
            self.user_id,
            self.handoff.dates.len()
        );
        Ok(())
    }
}

/// Union of the existing unavailable dates with the new selection,
/// sorted and deduplicated. ISO strings sort chronologically.
fn union_dates(existing: Vec<String>, selected: &[String]) -> Vec<String> {
    let mut all = existing;
    all.extend(selected.iter().cloned());
    all.sort();
    all.dedup();
    all
}
