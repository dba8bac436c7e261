//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::api::{Car, Rent};
use crate::booking::RentalHandoff;
use crate::core::day::DayEvent;

/// A calendar tap for the given day.
pub fn tap(y: i32, m: u32, d: u32) -> DayEvent {
    DayEvent::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// A fixed car renting at 120/day.
pub fn test_car() -> Car {
    Car {
        id: "1".to_string(),
        brand: "Audi".to_string(),
        name: "RS 5 Coupé".to_string(),
        about: "A sports coupe.".to_string(),
        fuel_type: "gasoline_motor".to_string(),
        thumbnail: "https://example.com/audi.png".to_string(),
        photos: vec!["https://example.com/audi-1.png".to_string()],
        accessories: vec![],
        rent: Rent {
            period: "Daily".to_string(),
            price: dec!(120),
        },
    }
}

/// A confirmed 4-day hand-off, 2024-03-10 through 2024-03-13.
pub fn test_handoff() -> RentalHandoff {
    RentalHandoff {
        car: test_car(),
        dates: vec![
            "2024-03-10".to_string(),
            "2024-03-11".to_string(),
            "2024-03-12".to_string(),
            "2024-03-13".to_string(),
        ],
    }
}
