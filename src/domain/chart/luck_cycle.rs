//! Decade luck cycles (大运).

use serde::{Deserialize, Serialize};

use super::birth::Gender;
use super::pillar::{FourPillars, StemBranch};

/// Number of decade windows generated.
pub const LUCK_CYCLE_COUNT: usize = 8;

/// Years covered by one window.
pub const YEARS_PER_CYCLE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// Forward for a yang year with a male chart or a yin year with a female one.
    pub fn for_chart(year_stem_is_yang: bool, gender: Gender) -> Self {
        match (year_stem_is_yang, gender) {
            (true, Gender::Male) | (false, Gender::Female) => LuckDirection::Forward,
            _ => LuckDirection::Reverse,
        }
    }

    pub fn step(&self) -> i64 {
        match self {
            LuckDirection::Forward => 1,
            LuckDirection::Reverse => -1,
        }
    }
}

/// One decade window, `[start_age, end_age)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycle {
    pub index: usize,
    pub start_age: u32,
    pub end_age: u32,
    pub pillar: StemBranch,
}

impl LuckCycle {
    pub fn contains_age(&self, age: u32) -> bool {
        (self.start_age..self.end_age).contains(&age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycles {
    pub direction: LuckDirection,
    pub cycles: Vec<LuckCycle>,
}

impl LuckCycles {
    /// The window containing `age`; ages past the last window stay on it.
    pub fn active_at(&self, age: u32) -> Option<&LuckCycle> {
        self.cycles
            .iter()
            .find(|cycle| cycle.contains_age(age))
            .or_else(|| self.cycles.last().filter(|last| age >= last.end_age))
    }
}

pub struct LuckCycleGenerator;

impl LuckCycleGenerator {
    /// Eight windows stepping from the month pillar; the origin age is fixed at 0.
    pub fn generate(pillars: &FourPillars, gender: Gender) -> LuckCycles {
        let direction = LuckDirection::for_chart(pillars.year().stem().is_yang(), gender);
        let start = pillars.month().pair();

        let cycles = (0..LUCK_CYCLE_COUNT)
            .map(|k| {
                let start_age = k as u32 * YEARS_PER_CYCLE;
                LuckCycle {
                    index: k,
                    start_age,
                    end_age: start_age + YEARS_PER_CYCLE,
                    pillar: start.offset(direction.step() * (k as i64 + 1)),
                }
            })
            .collect();

        LuckCycles { direction, cycles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Branch, Stem};

    fn geng_chen_chart() -> FourPillars {
        FourPillars::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Xin, Branch::Si),
            StemBranch::new(Stem::Geng, Branch::Chen),
            StemBranch::new(Stem::Gui, Branch::Wei),
        )
    }

    fn names(cycles: &LuckCycles) -> Vec<String> {
        cycles.cycles.iter().map(|c| c.pillar.to_string()).collect()
    }

    #[test]
    fn yang_year_male_runs_forward() {
        let cycles = LuckCycleGenerator::generate(&geng_chen_chart(), Gender::Male);
        assert_eq!(cycles.direction, LuckDirection::Forward);
        assert_eq!(
            names(&cycles),
            vec!["壬午", "癸未", "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑"]
        );
    }

    #[test]
    fn yang_year_female_runs_reverse() {
        let cycles = LuckCycleGenerator::generate(&geng_chen_chart(), Gender::Female);
        assert_eq!(cycles.direction, LuckDirection::Reverse);
        assert_eq!(
            names(&cycles),
            vec!["庚辰", "己卯", "戊寅", "丁丑", "丙子", "乙亥", "甲戌", "癸酉"]
        );
    }

    #[test]
    fn yin_year_direction_is_mirrored() {
        assert_eq!(LuckDirection::for_chart(false, Gender::Female), LuckDirection::Forward);
        assert_eq!(LuckDirection::for_chart(false, Gender::Male), LuckDirection::Reverse);
    }

    #[test]
    fn windows_are_contiguous_from_zero() {
        let cycles = LuckCycleGenerator::generate(&geng_chen_chart(), Gender::Male);
        assert_eq!(cycles.cycles.len(), LUCK_CYCLE_COUNT);
        assert_eq!(cycles.cycles[0].start_age, 0);
        for pair in cycles.cycles.windows(2) {
            assert_eq!(pair[0].end_age, pair[1].start_age);
        }
        assert_eq!(cycles.cycles[7].end_age, 80);
    }

    #[test]
    fn active_cycle_lookup() {
        let cycles = LuckCycleGenerator::generate(&geng_chen_chart(), Gender::Male);
        assert_eq!(cycles.active_at(0).map(|c| c.index), Some(0));
        assert_eq!(cycles.active_at(9).map(|c| c.index), Some(0));
        assert_eq!(cycles.active_at(10).map(|c| c.index), Some(1));
        assert_eq!(cycles.active_at(79).map(|c| c.index), Some(7));
        assert_eq!(cycles.active_at(95).map(|c| c.index), Some(7));
    }
}
