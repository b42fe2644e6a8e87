//! Ten-god (十神) classification of a stem relative to the day master.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::pillar::{FourPillars, PillarPosition};
use crate::domain::foundation::{cycle, ElementRelation, Relation, Stem};

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    #[serde(rename = "比肩")]
    Companion,
    #[serde(rename = "劫财")]
    RobWealth,
    #[serde(rename = "食神")]
    EatingGod,
    #[serde(rename = "伤官")]
    HurtingOfficer,
    #[serde(rename = "偏财")]
    IndirectWealth,
    #[serde(rename = "正财")]
    DirectWealth,
    #[serde(rename = "七杀")]
    SevenKillings,
    #[serde(rename = "正官")]
    DirectOfficer,
    #[serde(rename = "偏印")]
    IndirectResource,
    #[serde(rename = "正印")]
    DirectResource,
}

impl TenGod {
    /// All categories, paired (same polarity, differing polarity) per relation.
    pub const ALL: [TenGod; 10] = [
        TenGod::Companion,
        TenGod::RobWealth,
        TenGod::EatingGod,
        TenGod::HurtingOfficer,
        TenGod::IndirectWealth,
        TenGod::DirectWealth,
        TenGod::SevenKillings,
        TenGod::DirectOfficer,
        TenGod::IndirectResource,
        TenGod::DirectResource,
    ];

    /// The category for an element relation, split by yin-yang parity.
    pub fn from_relation(relation: Relation, same_polarity: bool) -> TenGod {
        match (relation, same_polarity) {
            (Relation::Same, true) => TenGod::Companion,
            (Relation::Same, false) => TenGod::RobWealth,
            (Relation::Generates, true) => TenGod::EatingGod,
            (Relation::Generates, false) => TenGod::HurtingOfficer,
            (Relation::Overcomes, true) => TenGod::IndirectWealth,
            (Relation::Overcomes, false) => TenGod::DirectWealth,
            (Relation::OvercomeBy, true) => TenGod::SevenKillings,
            (Relation::OvercomeBy, false) => TenGod::DirectOfficer,
            (Relation::GeneratedBy, true) => TenGod::IndirectResource,
            (Relation::GeneratedBy, false) => TenGod::DirectResource,
        }
    }

    /// The element relation this category stands for.
    pub fn relation(&self) -> Relation {
        match self {
            TenGod::Companion | TenGod::RobWealth => Relation::Same,
            TenGod::EatingGod | TenGod::HurtingOfficer => Relation::Generates,
            TenGod::IndirectWealth | TenGod::DirectWealth => Relation::Overcomes,
            TenGod::SevenKillings | TenGod::DirectOfficer => Relation::OvercomeBy,
            TenGod::IndirectResource | TenGod::DirectResource => Relation::GeneratedBy,
        }
    }

    /// Whether the two stems share polarity.
    pub fn is_same_polarity(&self) -> bool {
        matches!(
            self,
            TenGod::Companion
                | TenGod::EatingGod
                | TenGod::IndirectWealth
                | TenGod::SevenKillings
                | TenGod::IndirectResource
        )
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TenGod::Companion => "比肩",
            TenGod::RobWealth => "劫财",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "伤官",
            TenGod::IndirectWealth => "偏财",
            TenGod::DirectWealth => "正财",
            TenGod::SevenKillings => "七杀",
            TenGod::DirectOfficer => "正官",
            TenGod::IndirectResource => "偏印",
            TenGod::DirectResource => "正印",
        }
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A classified stem: either the day master itself or one of the ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGodSlot {
    #[serde(rename = "日主")]
    DayMaster,
    #[serde(untagged)]
    God(TenGod),
}

impl TenGodSlot {
    pub fn god(&self) -> Option<TenGod> {
        match self {
            TenGodSlot::DayMaster => None,
            TenGodSlot::God(god) => Some(*god),
        }
    }
}

impl fmt::Display for TenGodSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenGodSlot::DayMaster => write!(f, "日主"),
            TenGodSlot::God(god) => write!(f, "{}", god),
        }
    }
}

// Indexed by [day stem][(other - day) mod 10], filled once from ElementRelation.
static TEN_GOD_TABLE: Lazy<[[TenGod; 10]; 10]> = Lazy::new(|| {
    let mut table = [[TenGod::Companion; 10]; 10];
    for day in Stem::ALL {
        for diff in 0..cycle::STEM_COUNT {
            let other = day.offset(diff as i64);
            let relation = ElementRelation::between(day.element(), other.element());
            table[day.index()][diff] =
                TenGod::from_relation(relation, day.polarity() == other.polarity());
        }
    }
    table
});

/// Maps a stem to its ten-god category relative to the day master.
pub struct TenGodClassifier;

impl TenGodClassifier {
    /// Classifies `other` against `day`; an identical stem is the day master itself.
    pub fn classify(day: Stem, other: Stem) -> TenGodSlot {
        if day == other {
            TenGodSlot::DayMaster
        } else {
            TenGodSlot::God(Self::ten_god(day, other))
        }
    }

    /// Total variant: an identical stem counts as 比肩.
    pub fn ten_god(day: Stem, other: Stem) -> TenGod {
        let diff = cycle::distance(day.index(), other.index(), cycle::STEM_COUNT);
        TEN_GOD_TABLE[day.index()][diff]
    }
}

/// Ten-god category of each pillar's stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodAssignment {
    pub year: TenGodSlot,
    pub month: TenGodSlot,
    pub day: TenGodSlot,
    pub hour: TenGodSlot,
}

impl TenGodAssignment {
    /// The day pillar is always the day master; other stems get a named category.
    pub fn of(pillars: &FourPillars) -> Self {
        let day = pillars.day_master();
        let god = |stem: Stem| TenGodSlot::God(TenGodClassifier::ten_god(day, stem));
        Self {
            year: god(pillars.year().stem()),
            month: god(pillars.month().stem()),
            day: TenGodSlot::DayMaster,
            hour: god(pillars.hour().stem()),
        }
    }

    pub fn get(&self, position: PillarPosition) -> TenGodSlot {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }
}
