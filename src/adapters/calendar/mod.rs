//! Calendar adapters - CalendarOracle implementations.

mod ephemeris;
mod solar_term_calendar;

pub use solar_term_calendar::SolarTermCalendar;
