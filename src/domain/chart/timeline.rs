//! Year-by-year timeline pairing annual pillars with the active luck cycle.

use serde::Serialize;

use super::luck_cycle::LuckCycles;
use super::pillar::StemBranch;

/// Gregorian year whose annual pillar is 甲子 modulo 60.
const CYCLE_EPOCH_YEAR: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualEntry {
    pub age: u32,
    pub year: i32,
    pub annual_pillar: StemBranch,
    pub luck_cycle_index: Option<usize>,
    pub luck_pillar: Option<StemBranch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnualTimeline {
    pub birth_year: i32,
    pub entries: Vec<AnnualEntry>,
}

impl AnnualTimeline {
    /// Entries for ages `0..=years`.
    pub fn build(birth_year: i32, luck_cycles: &LuckCycles, years: u32) -> Self {
        let entries = (0..=years)
            .map(|age| {
                let year = birth_year + age as i32;
                let active = luck_cycles.active_at(age);
                AnnualEntry {
                    age,
                    year,
                    annual_pillar: annual_pillar(year),
                    luck_cycle_index: active.map(|cycle| cycle.index),
                    luck_pillar: active.map(|cycle| cycle.pillar),
                }
            })
            .collect();

        Self {
            birth_year,
            entries,
        }
    }

    pub fn entry_for_year(&self, year: i32) -> Option<&AnnualEntry> {
        self.entries.iter().find(|entry| entry.year == year)
    }
}

/// Sexagenary pillar of a Gregorian year.
pub fn annual_pillar(year: i32) -> StemBranch {
    StemBranch::from_cycle_index(i64::from(year) - CYCLE_EPOCH_YEAR)
}
