//! Wire types for the rental backend. Field renames track the JSON the
//! server actually speaks (camelCase on booking records, snake_case
//! elsewhere).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily rate and the unit it is quoted in ("ao dia", per day).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rent {
    pub period: String,
    /// Decimal end to end so cent-bearing prices never touch a float.
    pub price: Decimal,
}

/// One accessory line on a car's spec sheet (transmission, seats, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Accessory {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// A rentable car as served by `GET /cars`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub about: String,
    pub fuel_type: String,
    pub thumbnail: String,
    pub photos: Vec<String>,
    pub accessories: Vec<Accessory>,
    pub rent: Rent,
}

/// Per-car availability record, `GET`/`PUT /schedules_bycars/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarSchedule {
    pub id: String,
    pub unavailable_dates: Vec<String>,
}

/// Booking record submitted to `POST /schedules_byuser`. Boundary dates
/// are the display-formatted `dd/MM/yyyy` pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub user_id: u64,
    pub car: Car,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}
