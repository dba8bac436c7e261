//! # Rental backend client
//!
//! Thin reqwest wrapper over the four endpoints the booking flow touches:
//!
//! - `GET  /cars`                    — the browsable fleet
//! - `GET  /schedules_bycars/{id}`   — a car's unavailable dates
//! - `POST /schedules_byuser`        — create a booking record
//! - `PUT  /schedules_bycars/{id}`   — write back the unioned dates
//!
//! No timeout, retry or cancellation policy lives here; callers decide
//! what a failure means. The base URL is injectable so tests can point at
//! a mock server.

use std::fmt;

use log::{debug, info, warn};

use super::types::{BookingRequest, Car, CarSchedule};

/// Errors surfaced by backend calls.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body didn't parse as the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Rental backend client. Cheap to clone; reqwest pools connections
/// internally.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Base URL precedence: explicit argument → `AUTORENT_API_URL` env var
    /// → local default.
    pub fn new(base_url: Option<String>) -> Self {
        let env_url = std::env::var("AUTORENT_API_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| "http://localhost:3333".to_string());

        Self {
            base_url: final_url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the full car list.
    pub async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        let url = format!("{}/cars", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetches the availability record for one car.
    pub async fn car_schedule(&self, car_id: &str) -> Result<CarSchedule, ApiError> {
        let url = format!("{}/schedules_bycars/{car_id}", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Creates a booking record for the user.
    pub async fn create_booking(&self, booking: &BookingRequest) -> Result<(), ApiError> {
        let url = format!("{}/schedules_byuser", self.base_url);
        info!(
            "POST {url}: user={} car={} {}..{}",
            booking.user_id, booking.car.id, booking.start_date, booking.end_date
        );

        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }

    /// Replaces a car's availability record.
    pub async fn update_car_schedule(&self, schedule: &CarSchedule) -> Result<(), ApiError> {
        let url = format!("{}/schedules_bycars/{}", self.base_url, schedule.id);
        info!(
            "PUT {url}: {} unavailable dates",
            schedule.unavailable_dates.len()
        );

        let response = self
            .client
            .put(&url)
            .json(schedule)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await?;
        Ok(())
    }
}

/// Maps non-success statuses to `ApiError::Api`, reading what it can of
/// the body for the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("backend error: {status} - {message}");
    Err(ApiError::Api { status, message })
}
