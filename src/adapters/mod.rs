//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `calendar` - Gregorian to sexagenary conversion from solar-term instants

pub mod calendar;

pub use calendar::SolarTermCalendar;
