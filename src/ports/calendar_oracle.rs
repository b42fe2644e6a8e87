//! CalendarOracle port for Gregorian to sexagenary conversion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::chart::StemBranch;

/// Year, month and day pillars of a Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SexagenaryDate {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
}

/// Authoritative calendrical converter.
///
/// The chart engine trusts whatever the oracle returns and performs no
/// validation of its output. Implementations must be total over the
/// supported year range and free of side effects.
pub trait CalendarOracle: Send + Sync {
    /// Converts a (true solar) Gregorian date to its year, month and day pillars.
    fn convert(&self, date: NaiveDate) -> SexagenaryDate;
}
