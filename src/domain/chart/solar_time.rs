//! True solar time from local clock time and longitude.

use chrono::{Duration, NaiveDateTime};

use super::birth::parse_local_datetime;
use crate::domain::foundation::ValidationError;

/// Meridian of the UTC+8 clock the engine assumes by default.
pub const DEFAULT_STANDARD_MERIDIAN: f64 = 120.0;

/// Minutes of clock time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Shifts clock time by the longitude distance from the standard meridian.
///
/// Only the linear longitude offset is applied; the seasonal equation of
/// time is not modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrueSolarTimeCorrector {
    standard_meridian: f64,
}

impl TrueSolarTimeCorrector {
    pub fn new(standard_meridian: f64) -> Self {
        Self { standard_meridian }
    }

    pub fn standard_meridian(&self) -> f64 {
        self.standard_meridian
    }

    /// Offset in minutes added to clock time (negative west of the meridian).
    pub fn offset_minutes(&self, longitude: f64) -> f64 {
        (longitude - self.standard_meridian) * MINUTES_PER_DEGREE
    }

    /// Corrects a local time to the microsecond. Pillars are derived from
    /// this exact instant, so 12:59:59.6 stays in the 午 hour.
    pub fn correct(&self, local_time: NaiveDateTime, longitude: f64) -> NaiveDateTime {
        let micros = (self.offset_minutes(longitude) * MICROS_PER_MINUTE).round() as i64;
        local_time + Duration::microseconds(micros)
    }

    /// Parses `YYYY-MM-DD` and `HH:MM` and corrects the result.
    pub fn correct_str(
        &self,
        birth_date: &str,
        birth_time: &str,
        longitude: f64,
    ) -> Result<NaiveDateTime, ValidationError> {
        let local_time = parse_local_datetime(birth_date, birth_time)?;
        Ok(self.correct(local_time, longitude))
    }
}

impl Default for TrueSolarTimeCorrector {
    fn default() -> Self {
        Self::new(DEFAULT_STANDARD_MERIDIAN)
    }
}
