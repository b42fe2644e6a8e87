//! Assembles the four pillars from the calendar oracle and the birth hour.

use chrono::{NaiveDateTime, Timelike};

use super::pillar::{FourPillars, StemBranch};
use crate::domain::foundation::{Branch, Stem};
use crate::ports::CalendarOracle;

/// Builds [`FourPillars`] for a true solar time.
pub struct PillarBuilder;

impl PillarBuilder {
    /// Year, month and day come verbatim from the oracle; the hour pillar is derived.
    pub fn build(oracle: &dyn CalendarOracle, true_solar_time: NaiveDateTime) -> FourPillars {
        let date = oracle.convert(true_solar_time.date());
        let hour = Self::hour_pillar(date.day.stem, true_solar_time.hour());
        FourPillars::new(date.year, date.month, date.day, hour)
    }

    /// Two-hour windows anchored at 23:00: 23:00-00:59 is 子, 01:00-02:59 is 丑, …
    pub fn hour_branch(hour: u32) -> Branch {
        Branch::from_index((hour as i64 + 1) / 2)
    }

    /// Stem of the 子 hour for a day stem.
    ///
    /// Day stems five apart share a group: 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
    pub fn zi_hour_stem(day_stem: Stem) -> Stem {
        Stem::from_index((day_stem.index() % 5) as i64 * 2)
    }

    /// The hour pillar for a day stem and a clock hour (0-23).
    pub fn hour_pillar(day_stem: Stem, hour: u32) -> StemBranch {
        let branch = Self::hour_branch(hour);
        let stem = Self::zi_hour_stem(day_stem).offset(branch.index() as i64);
        StemBranch::new(stem, branch)
    }
}
