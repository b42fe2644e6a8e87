//! Pillars: stem-branch pairs at the four temporal positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{cycle, Branch, Stem};

/// The four temporal positions of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    /// All positions in chart order.
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PillarPosition::Year => "年柱",
            PillarPosition::Month => "月柱",
            PillarPosition::Day => "日柱",
            PillarPosition::Hour => "时柱",
        }
    }
}

impl fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A stem paired with a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// The pair at `index` of the 60-term cycle (甲子 = 0).
    pub fn from_cycle_index(index: i64) -> Self {
        let k = cycle::wrap(index, cycle::SEXAGENARY_COUNT) as i64;
        Self::new(Stem::from_index(k), Branch::from_index(k))
    }

    /// Position in the 60-term cycle, `None` for pairs of mixed parity.
    pub fn cycle_index(&self) -> Option<usize> {
        cycle::sexagenary_index(self.stem.index(), self.branch.index())
    }

    /// Steps stem and branch together by `steps` (negative goes backwards).
    pub fn offset(&self, steps: i64) -> Self {
        Self::new(self.stem.offset(steps), self.branch.offset(steps))
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// A stem-branch pair fixed at one chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    position: PillarPosition,
    #[serde(flatten)]
    pair: StemBranch,
}

impl Pillar {
    pub fn new(position: PillarPosition, pair: StemBranch) -> Self {
        Self { position, pair }
    }

    pub fn position(&self) -> PillarPosition {
        self.position
    }

    pub fn pair(&self) -> StemBranch {
        self.pair
    }

    pub fn stem(&self) -> Stem {
        self.pair.stem
    }

    pub fn branch(&self) -> Branch {
        self.pair.branch
    }
}

/// The complete set of four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
}

impl FourPillars {
    pub fn new(year: StemBranch, month: StemBranch, day: StemBranch, hour: StemBranch) -> Self {
        Self {
            year: Pillar::new(PillarPosition::Year, year),
            month: Pillar::new(PillarPosition::Month, month),
            day: Pillar::new(PillarPosition::Day, day),
            hour: Pillar::new(PillarPosition::Hour, hour),
        }
    }

    pub fn year(&self) -> Pillar {
        self.year
    }

    pub fn month(&self) -> Pillar {
        self.month
    }

    pub fn day(&self) -> Pillar {
        self.day
    }

    pub fn hour(&self) -> Pillar {
        self.hour
    }

    /// The day stem, reference point of every relational classification.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = Pillar> + '_ {
        PillarPosition::ALL.iter().map(move |p| self.get(*p))
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.pair, self.month.pair, self.day.pair, self.hour.pair
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sb(stem: Stem, branch: Branch) -> StemBranch {
        StemBranch::new(stem, branch)
    }

    #[test]
    fn from_cycle_index_walks_the_cycle() {
        assert_eq!(StemBranch::from_cycle_index(0), sb(Stem::Jia, Branch::Zi));
        assert_eq!(StemBranch::from_cycle_index(16), sb(Stem::Geng, Branch::Chen));
        assert_eq!(StemBranch::from_cycle_index(59), sb(Stem::Gui, Branch::Hai));
        assert_eq!(StemBranch::from_cycle_index(-1), sb(Stem::Gui, Branch::Hai));
    }

    #[test]
    fn cycle_index_inverts_from_cycle_index() {
        for k in 0..60 {
            assert_eq!(StemBranch::from_cycle_index(k).cycle_index(), Some(k as usize));
        }
    }

    #[test]
    fn offset_moves_stem_and_branch_together() {
        let xin_si = sb(Stem::Xin, Branch::Si);
        assert_eq!(xin_si.offset(1), sb(Stem::Ren, Branch::Wu));
        assert_eq!(xin_si.offset(-1), sb(Stem::Geng, Branch::Chen));
    }

    #[test]
    fn four_pillars_exposes_day_master() {
        let pillars = FourPillars::new(
            sb(Stem::Geng, Branch::Wu),
            sb(Stem::Xin, Branch::Si),
            sb(Stem::Geng, Branch::Chen),
            sb(Stem::Gui, Branch::Wei),
        );
        assert_eq!(pillars.day_master(), Stem::Geng);
        assert_eq!(pillars.hour().position(), PillarPosition::Hour);
        assert_eq!(pillars.to_string(), "庚午 辛巳 庚辰 癸未");
    }

    #[test]
    fn iter_yields_chart_order() {
        let pillars = FourPillars::new(
            sb(Stem::Jia, Branch::Zi),
            sb(Stem::Bing, Branch::Yin),
            sb(Stem::Wu, Branch::Chen),
            sb(Stem::Geng, Branch::Wu),
        );
        let positions: Vec<PillarPosition> = pillars.iter().map(|p| p.position()).collect();
        assert_eq!(positions, PillarPosition::ALL.to_vec());
    }
}
