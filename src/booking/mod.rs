//! # Booking flow
//!
//! Screen controllers for the rental flow, UI-framework free:
//!
//! - [`scheduling`]: owns the calendar selection, gates confirmation
//! - [`checkout`]: prices the interval and submits the booking
//!
//! State is held in plain structs and mutated only through their methods,
//! so the whole flow is drivable from tests without a UI.

pub mod checkout;
pub mod scheduling;

pub use checkout::{CheckoutError, CheckoutScreen, SagaStep};
pub use scheduling::{RentalHandoff, SchedulingScreen, ValidationGap};
