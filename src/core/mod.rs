//! # Core Scheduling Logic
//!
//! This module contains the rental-scheduling business logic.
//! It knows nothing about any specific UI technology or HTTP stack.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • DayEvent (taps)      │
//!                    │  • SelectionState       │
//!                    │  • interval expansion   │
//!                    │  • pricing              │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │  Booking   │      │  Calendar  │      │    API     │
//!     │  screens   │      │   widget   │      │   client   │
//!     │            │      │ (external) │      │ (reqwest)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`day`]: `DayEvent` taps and the `YYYY-MM-DD` / `dd/MM/yyyy` adapters
//! - [`interval`]: interval expansion and the per-day style map
//! - [`selection`]: `SelectionState` and the day-tap transition
//! - [`pricing`]: decimal rent totals
//! - [`calendar`]: the external calendar widget's props contract
//! - [`config`]: settings file, env and CLI resolution

pub mod calendar;
pub mod config;
pub mod day;
pub mod interval;
pub mod pricing;
pub mod selection;

pub use day::{DayEvent, DayParseError, format_day, parse_day};
pub use interval::{DayMarker, DayStyle, MarkedDateMap, expand_interval, mark_interval};
pub use selection::{RentalPeriod, SelectionState};
