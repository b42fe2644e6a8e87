//! Symbolic markers (神煞) attached to a pillar.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pillar::StemBranch;
use crate::domain::foundation::{Branch, Stem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = "天德贵人")]
    HeavenlyVirtue,
    #[serde(rename = "月德贵人")]
    MonthlyVirtue,
    #[serde(rename = "天乙贵人")]
    NoblePerson,
    #[serde(rename = "桃花")]
    PeachBlossom,
    #[serde(rename = "文昌")]
    Scholar,
    #[serde(rename = "驿马")]
    TravelingHorse,
}

impl Marker {
    pub fn display_name(&self) -> &'static str {
        match self {
            Marker::HeavenlyVirtue => "天德贵人",
            Marker::MonthlyVirtue => "月德贵人",
            Marker::NoblePerson => "天乙贵人",
            Marker::PeachBlossom => "桃花",
            Marker::Scholar => "文昌",
            Marker::TravelingHorse => "驿马",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 天德 targets per birth month (January first): a stem, a branch, or both.
const HEAVENLY_VIRTUE: [(Option<Stem>, Branch); 12] = [
    (Some(Stem::Ding), Branch::Yin),
    (None, Branch::Shen),
    (Some(Stem::Ren), Branch::Hai),
    (Some(Stem::Xin), Branch::Shen),
    (None, Branch::Hai),
    (Some(Stem::Jia), Branch::Yin),
    (Some(Stem::Gui), Branch::Shen),
    (None, Branch::Yin),
    (Some(Stem::Bing), Branch::Yin),
    (Some(Stem::Yi), Branch::Shen),
    (None, Branch::Si),
    (Some(Stem::Geng), Branch::Shen),
];

/// 月德 stem per birth month (January first).
const MONTHLY_VIRTUE: [Stem; 12] = [
    Stem::Bing,
    Stem::Jia,
    Stem::Ren,
    Stem::Geng,
    Stem::Bing,
    Stem::Jia,
    Stem::Ren,
    Stem::Geng,
    Stem::Bing,
    Stem::Jia,
    Stem::Ren,
    Stem::Geng,
];

/// 天乙 branches per stem.
const NOBLE_PERSON: [[Branch; 2]; 10] = [
    [Branch::Chou, Branch::Wei],
    [Branch::Zi, Branch::Shen],
    [Branch::Hai, Branch::You],
    [Branch::Hai, Branch::You],
    [Branch::Chou, Branch::Wei],
    [Branch::Zi, Branch::Shen],
    [Branch::Chou, Branch::Wei],
    [Branch::Wu, Branch::Yin],
    [Branch::Mao, Branch::Si],
    [Branch::Mao, Branch::Si],
];

/// 文昌 branch per stem.
const SCHOLAR: [Branch; 10] = [
    Branch::Si,
    Branch::Wu,
    Branch::Shen,
    Branch::You,
    Branch::Shen,
    Branch::You,
    Branch::Hai,
    Branch::Zi,
    Branch::Yin,
    Branch::Mao,
];

// The trine groups 申子辰, 巳酉丑, 寅午戌, 亥卯未 share a branch index mod 4.
const PEACH_BLOSSOM: [Branch; 4] = [Branch::You, Branch::Wu, Branch::Mao, Branch::Zi];
const TRAVELING_HORSE: [Branch; 4] = [Branch::Yin, Branch::Hai, Branch::Shen, Branch::Si];

fn trine_target(table: &[Branch; 4], trigger: Branch) -> Branch {
    table[trigger.index() % 4]
}

/// Context shared by every pillar of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerContext {
    /// Gregorian month (1-12) of the local birth date.
    pub birth_month: u32,
    pub year_branch: Branch,
    pub day_branch: Branch,
}

/// Runs every detector against one pillar; repeated names are kept.
pub fn markers_for(pillar: StemBranch, context: &MarkerContext) -> Vec<Marker> {
    let StemBranch { stem, branch } = pillar;
    let mut found = Vec::new();

    if let Some(month) = month_slot(context.birth_month) {
        let (virtue_stem, virtue_branch) = HEAVENLY_VIRTUE[month];
        if virtue_stem == Some(stem) || virtue_branch == branch {
            found.push(Marker::HeavenlyVirtue);
        }
        if MONTHLY_VIRTUE[month] == stem {
            found.push(Marker::MonthlyVirtue);
        }
    }

    if NOBLE_PERSON[stem.index()].contains(&branch) {
        found.push(Marker::NoblePerson);
    }

    for trigger in [context.year_branch, context.day_branch] {
        if trine_target(&PEACH_BLOSSOM, trigger) == branch {
            found.push(Marker::PeachBlossom);
        }
    }

    if SCHOLAR[stem.index()] == branch {
        found.push(Marker::Scholar);
    }

    for trigger in [context.year_branch, context.day_branch] {
        if trine_target(&TRAVELING_HORSE, trigger) == branch {
            found.push(Marker::TravelingHorse);
        }
    }

    found
}

fn month_slot(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}
