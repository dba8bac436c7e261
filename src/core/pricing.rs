//! Rental pricing. Prices carry cents, so totals are computed on
//! `rust_decimal::Decimal` rather than floats.

use rust_decimal::Decimal;

/// Total for a rental: daily price times the number of selected days.
pub fn rent_total(daily_price: Decimal, num_days: usize) -> Decimal {
    daily_price * Decimal::from(num_days as u64)
}
