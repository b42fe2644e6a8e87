//! Twelve life-stage phases (十二长生) of a stem over the branches.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{cycle, Branch, Stem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    #[serde(rename = "长生")]
    Birth,
    #[serde(rename = "沐浴")]
    Bath,
    #[serde(rename = "冠带")]
    Crown,
    #[serde(rename = "临官")]
    Office,
    #[serde(rename = "帝旺")]
    Peak,
    #[serde(rename = "衰")]
    Decline,
    #[serde(rename = "病")]
    Sickness,
    #[serde(rename = "死")]
    Death,
    #[serde(rename = "墓")]
    Tomb,
    #[serde(rename = "绝")]
    Extinction,
    #[serde(rename = "胎")]
    Conception,
    #[serde(rename = "养")]
    Nurture,
}

impl LifeStage {
    /// Phases in cycle order starting from 长生.
    pub const ALL: [LifeStage; 12] = [
        LifeStage::Birth,
        LifeStage::Bath,
        LifeStage::Crown,
        LifeStage::Office,
        LifeStage::Peak,
        LifeStage::Decline,
        LifeStage::Sickness,
        LifeStage::Death,
        LifeStage::Tomb,
        LifeStage::Extinction,
        LifeStage::Conception,
        LifeStage::Nurture,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LifeStage::Birth => "长生",
            LifeStage::Bath => "沐浴",
            LifeStage::Crown => "冠带",
            LifeStage::Office => "临官",
            LifeStage::Peak => "帝旺",
            LifeStage::Decline => "衰",
            LifeStage::Sickness => "病",
            LifeStage::Death => "死",
            LifeStage::Tomb => "墓",
            LifeStage::Extinction => "绝",
            LifeStage::Conception => "胎",
            LifeStage::Nurture => "养",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Branch where each stem's 长生 phase falls, in stem order.
const BIRTH_BRANCHES: [Branch; 10] = [
    Branch::Hai,
    Branch::Wu,
    Branch::Yin,
    Branch::You,
    Branch::Yin,
    Branch::You,
    Branch::Si,
    Branch::Zi,
    Branch::Shen,
    Branch::Mao,
];

// Yang stems advance through the branches, yin stems retreat.
static LIFE_STAGE_TABLE: Lazy<[[LifeStage; 12]; 10]> = Lazy::new(|| {
    let mut table = [[LifeStage::Birth; 12]; 10];
    for stem in Stem::ALL {
        let birth = BIRTH_BRANCHES[stem.index()].index();
        for branch in Branch::ALL {
            let steps = if stem.is_yang() {
                cycle::distance(birth, branch.index(), cycle::BRANCH_COUNT)
            } else {
                cycle::distance(branch.index(), birth, cycle::BRANCH_COUNT)
            };
            table[stem.index()][branch.index()] = LifeStage::ALL[steps];
        }
    }
    table
});

pub fn life_stage(stem: Stem, branch: Branch) -> LifeStage {
    LIFE_STAGE_TABLE[stem.index()][branch.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn birth_branch_maps_to_birth_phase() {
        for (stem, branch) in Stem::ALL.iter().zip(BIRTH_BRANCHES.iter()) {
            assert_eq!(life_stage(*stem, *branch), LifeStage::Birth);
        }
    }

    #[test]
    fn yang_stem_advances() {
        assert_eq!(life_stage(Stem::Jia, Branch::Zi), LifeStage::Bath);
        assert_eq!(life_stage(Stem::Jia, Branch::Mao), LifeStage::Peak);
        assert_eq!(life_stage(Stem::Jia, Branch::Wei), LifeStage::Tomb);
    }

    #[test]
    fn yin_stem_retreats() {
        assert_eq!(life_stage(Stem::Yi, Branch::Si), LifeStage::Bath);
        assert_eq!(life_stage(Stem::Yi, Branch::Yin), LifeStage::Peak);
        assert_eq!(life_stage(Stem::Yi, Branch::Xu), LifeStage::Tomb);
    }

    #[test]
    fn geng_day_master_phases() {
        assert_eq!(life_stage(Stem::Geng, Branch::Wu), LifeStage::Bath);
        assert_eq!(life_stage(Stem::Geng, Branch::Si), LifeStage::Birth);
        assert_eq!(life_stage(Stem::Geng, Branch::Chen), LifeStage::Nurture);
        assert_eq!(life_stage(Stem::Geng, Branch::Wei), LifeStage::Crown);
    }

    #[test]
    fn every_stem_visits_each_phase_once() {
        for stem in Stem::ALL {
            let seen: HashSet<LifeStage> =
                Branch::ALL.iter().map(|b| life_stage(stem, *b)).collect();
            assert_eq!(seen.len(), 12);
        }
    }
}
