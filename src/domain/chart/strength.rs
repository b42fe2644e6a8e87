//! Day-master strength and the useful/unfavorable element split.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::energy::ElementScoreBoard;
use super::pillar::FourPillars;
use crate::domain::foundation::{Element, ElementRelation};

/// Differential below which a chart counts as balanced.
const BALANCED_BELOW: u32 = 5;

/// Differential above which a chart is fully strong or weak.
const EXTREME_ABOVE: u32 = 20;

/// Five-level strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthCategory {
    #[serde(rename = "强")]
    Strong,
    #[serde(rename = "偏强")]
    LeaningStrong,
    #[serde(rename = "中和")]
    Balanced,
    #[serde(rename = "偏弱")]
    LeaningWeak,
    #[serde(rename = "弱")]
    Weak,
}

impl StrengthCategory {
    pub fn from_differential(is_strong: bool, differential: u32) -> Self {
        if differential < BALANCED_BELOW {
            StrengthCategory::Balanced
        } else if is_strong {
            if differential > EXTREME_ABOVE {
                StrengthCategory::Strong
            } else {
                StrengthCategory::LeaningStrong
            }
        } else if differential > EXTREME_ABOVE {
            StrengthCategory::Weak
        } else {
            StrengthCategory::LeaningWeak
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthCategory::Strong => "强",
            StrengthCategory::LeaningStrong => "偏强",
            StrengthCategory::Balanced => "中和",
            StrengthCategory::LeaningWeak => "偏弱",
            StrengthCategory::Weak => "弱",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of weighing the day master's support against its drains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthVerdict {
    pub day_master_element: Element,
    pub same_party: u32,
    pub opposite_party: u32,
    pub grounding_bonus: i32,
    pub sibling_bonus: u32,
    pub total_same: i32,
    pub differential: u32,
    pub category: StrengthCategory,
    pub is_strong: bool,
    /// Ordered by precedence.
    pub useful: Vec<Element>,
    pub unfavorable: Vec<Element>,
    pub favorable: Option<Element>,
}

impl StrengthVerdict {
    /// First useful element, if any.
    pub fn primary_useful(&self) -> Option<Element> {
        self.useful.first().copied()
    }
}

/// The element roles relative to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRoles {
    pub sibling: Element,
    pub resource: Element,
    pub output: Element,
    pub wealth: Element,
    pub authority: Element,
}

impl ElementRoles {
    pub fn of(day_master: Element) -> Self {
        Self {
            sibling: day_master,
            resource: ElementRelation::generator_of(day_master),
            output: ElementRelation::generates(day_master),
            wealth: ElementRelation::overcomes(day_master),
            authority: ElementRelation::overcome_by(day_master),
        }
    }

    /// Elements that feed or match the day master.
    pub fn supporting(&self) -> [Element; 2] {
        [self.resource, self.sibling]
    }

    /// Elements that drain, are consumed by, or attack the day master.
    pub fn draining(&self) -> [Element; 3] {
        [self.output, self.wealth, self.authority]
    }
}

pub struct StrengthEvaluator;

impl StrengthEvaluator {
    pub fn evaluate(pillars: &FourPillars, board: &ElementScoreBoard) -> StrengthVerdict {
        let day_master = pillars.day_master();
        let element = day_master.element();
        let roles = ElementRoles::of(element);

        let same_party = board.score(roles.resource) + board.score(roles.sibling);
        let opposite_party: u32 = roles.draining().iter().map(|e| board.score(*e)).sum();

        let grounding_bonus = Self::grounding_bonus(pillars, element);
        let sibling_bonus = Self::sibling_bonus(pillars);

        let total_same = same_party as i32 + grounding_bonus + sibling_bonus as i32;
        let opposite = opposite_party as i32;
        let is_strong = total_same > opposite;
        let differential = (total_same - opposite).unsigned_abs();
        let category = StrengthCategory::from_differential(is_strong, differential);

        let present = |e: &Element| board.score(*e) > 0;
        let (useful, unfavorable): (Vec<Element>, Vec<Element>) = if is_strong {
            (
                roles.draining().into_iter().filter(present).collect(),
                roles.supporting().to_vec(),
            )
        } else {
            let mut useful = Vec::with_capacity(2);
            if present(&roles.resource) {
                useful.push(roles.resource);
            }
            useful.push(roles.sibling);
            (useful, roles.draining().into_iter().filter(present).collect())
        };
        let favorable = useful.get(1).or_else(|| useful.first()).copied();

        StrengthVerdict {
            day_master_element: element,
            same_party,
            opposite_party,
            grounding_bonus,
            sibling_bonus,
            total_same,
            differential,
            category,
            is_strong,
            useful,
            unfavorable,
            favorable,
        }
    }

    /// Month and day branch support for the day-master element.
    pub fn grounding_bonus(pillars: &FourPillars, element: Element) -> i32 {
        let month = pillars.month().branch().element();
        let day = pillars.day().branch().element();

        let month_bonus = if month == element {
            10
        } else if ElementRelation::generates(month) == element {
            8
        } else if ElementRelation::overcomes(element) == month {
            5
        } else if ElementRelation::overcomes(month) == element {
            -5
        } else {
            0
        };

        let day_bonus = if day == element {
            5
        } else if ElementRelation::generates(day) == element {
            3
        } else {
            0
        };

        month_bonus + day_bonus
    }

    /// +3 per visible stem identical to the day master, +2 per same-element stem.
    pub fn sibling_bonus(pillars: &FourPillars) -> u32 {
        let day_master = pillars.day_master();
        [pillars.year(), pillars.month(), pillars.hour()]
            .iter()
            .map(|pillar| {
                let stem = pillar.stem();
                if stem == day_master {
                    3
                } else if stem.element() == day_master.element() {
                    2
                } else {
                    0
                }
            })
            .sum()
    }
}
