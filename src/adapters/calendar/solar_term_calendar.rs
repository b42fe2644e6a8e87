//! Built-in CalendarOracle driven by solar-term instants.
//!
//! Each Gregorian month holds exactly one sectional term (節), found by
//! searching the sun's apparent longitude. A date belongs to the new month
//! only when the term instant, in China Standard Time, is at or before
//! 00:00 of that date, so 2024-02-04 (立春 at 16:27) is still 癸卯 year.
//!
//! # Usage
//!
//! ```ignore
//! use four_pillars::adapters::calendar::SolarTermCalendar;
//! use four_pillars::ports::CalendarOracle;
//!
//! let calendar = SolarTermCalendar::new();
//! let date = calendar.convert(chrono::NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
//! ```

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::ephemeris;
use crate::domain::chart::StemBranch;
use crate::domain::foundation::{Branch, Stem};
use crate::ports::{CalendarOracle, SexagenaryDate};

/// Solar longitude of 小寒, the sectional term falling in January.
const JANUARY_TERM_LONGITUDE: f64 = 285.0;

const DEGREES_PER_MONTH: f64 = 30.0;

/// China Standard Time is UTC+8.
const CST_OFFSET_HOURS: i64 = 8;

/// Offset that puts 1949-10-01 (a 甲子 day) at cycle index 0.
const DAY_CYCLE_OFFSET: i64 = 14;

/// Gregorian year whose pillar is 甲子 modulo 60.
const YEAR_CYCLE_EPOCH: i64 = 4;

/// Stateless solar-term rendition of the sexagenary calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTermCalendar;

impl SolarTermCalendar {
    pub fn new() -> Self {
        Self
    }

    /// Instant, in China Standard Time, of the sectional term in `date`'s
    /// Gregorian month (立春 for February, 惊蛰 for March, ...).
    pub fn sectional_term(date: NaiveDate) -> NaiveDateTime {
        let target = (JANUARY_TERM_LONGITUDE + DEGREES_PER_MONTH * f64::from(date.month0()))
            .rem_euclid(360.0);
        let guess = date.and_time(NaiveTime::MIN);
        ephemeris::solar_longitude_instant(target, guess) + Duration::hours(CST_OFFSET_HOURS)
    }

    /// Month branch; the term day itself only switches when the term
    /// instant is at or before midnight.
    pub fn month_branch(date: NaiveDate) -> Branch {
        let month = i64::from(date.month());
        if Self::sectional_term(date) <= date.and_time(NaiveTime::MIN) {
            Branch::from_index(month)
        } else {
            Branch::from_index(month - 1)
        }
    }

    /// Year pillar; dates before 立春 belong to the previous year.
    pub fn year_pillar(date: NaiveDate) -> StemBranch {
        Self::year_in_month(date, Self::month_branch(date))
    }

    fn year_in_month(date: NaiveDate, month_branch: Branch) -> StemBranch {
        let before_spring =
            date.month() == 1 || (date.month() == 2 && month_branch == Branch::Chou);
        let year = i64::from(date.year()) - i64::from(before_spring);
        StemBranch::from_cycle_index(year - YEAR_CYCLE_EPOCH)
    }

    /// Month stem from the year stem: 甲己 years open on 丙寅, 乙庚 on 戊寅, ...
    pub fn month_pillar(year_stem: Stem, branch: Branch) -> StemBranch {
        let first_month_stem = year_stem.index() as i64 * 2 + 2;
        let stem = Stem::from_index(first_month_stem + i64::from(branch.month_ordinal()) - 1);
        StemBranch::new(stem, branch)
    }

    pub fn day_pillar(date: NaiveDate) -> StemBranch {
        StemBranch::from_cycle_index(i64::from(date.num_days_from_ce()) + DAY_CYCLE_OFFSET)
    }
}

impl CalendarOracle for SolarTermCalendar {
    fn convert(&self, date: NaiveDate) -> SexagenaryDate {
        let branch = Self::month_branch(date);
        let year = Self::year_in_month(date, branch);
        let month = Self::month_pillar(year.stem, branch);
        let day = Self::day_pillar(date);

        tracing::debug!(
            %date,
            year = %year,
            month = %month,
            day = %day,
            "Converted date to sexagenary pillars"
        );

        SexagenaryDate { year, month, day }
    }
}
