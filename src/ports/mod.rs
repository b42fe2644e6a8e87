//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CalendarOracle` - Gregorian to sexagenary year/month/day conversion

mod calendar_oracle;

pub use calendar_oracle::{CalendarOracle, SexagenaryDate};
