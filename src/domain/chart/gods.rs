//! Useful, favorable, unfavorable, hostile and neutral element roles.

use serde::{Deserialize, Serialize};

use super::strength::StrengthVerdict;
use crate::domain::foundation::{Element, ElementRelation};

const PRIMARY_DESCRIPTION: &str = "命局最需要的五行，能平衡命局能量";
const SECONDARY_DESCRIPTION: &str = "对命局有利的五行，能辅助用神发挥作用";
const UNFAVORABLE_DESCRIPTION: &str = "对命局不利的五行，会破坏命局平衡";
const HOSTILE_DESCRIPTION: &str = "克制用神的五行，需要特别注意";
const NEUTRAL_DESCRIPTION: &str = "对命局影响不大的五行";

/// An optional element with its explanation.
///
/// An entry without an element carries an empty description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodEntry {
    pub element: Option<Element>,
    pub description: String,
}

impl GodEntry {
    fn new(element: Option<Element>, description: &str) -> Self {
        let description = match element {
            Some(_) => description.to_string(),
            None => String::new(),
        };
        Self {
            element,
            description,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.element.is_none()
    }
}

/// 用神, 喜神, 忌神, 仇神 and 闲神 of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodsAnalysis {
    #[serde(rename = "用神")]
    pub primary_useful: GodEntry,
    #[serde(rename = "喜神")]
    pub secondary_useful: GodEntry,
    #[serde(rename = "忌神")]
    pub unfavorable: GodEntry,
    #[serde(rename = "仇神")]
    pub hostile: GodEntry,
    #[serde(rename = "闲神")]
    pub neutral: GodEntry,
}

impl GodsAnalysis {
    pub fn from_verdict(verdict: &StrengthVerdict) -> Self {
        let primary = verdict.useful.first().copied();
        let secondary = verdict.useful.get(1).copied().or(primary);
        let unfavorable = verdict.unfavorable.first().copied();
        let hostile = match (unfavorable, primary) {
            (Some(taboo), Some(useful)) if ElementRelation::overcomes(taboo) == useful => {
                Some(taboo)
            }
            _ => None,
        };
        let neutral = Element::ALL
            .iter()
            .copied()
            .find(|e| !verdict.useful.contains(e) && !verdict.unfavorable.contains(e));

        Self {
            primary_useful: GodEntry::new(primary, PRIMARY_DESCRIPTION),
            secondary_useful: GodEntry::new(secondary, SECONDARY_DESCRIPTION),
            unfavorable: GodEntry::new(unfavorable, UNFAVORABLE_DESCRIPTION),
            hostile: GodEntry::new(hostile, HOSTILE_DESCRIPTION),
            neutral: GodEntry::new(neutral, NEUTRAL_DESCRIPTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::strength::StrengthCategory;

    fn verdict(useful: Vec<Element>, unfavorable: Vec<Element>) -> StrengthVerdict {
        StrengthVerdict {
            day_master_element: Element::Metal,
            same_party: 0,
            opposite_party: 0,
            grounding_bonus: 0,
            sibling_bonus: 0,
            total_same: 0,
            differential: 0,
            category: StrengthCategory::Balanced,
            is_strong: false,
            favorable: useful.get(1).or_else(|| useful.first()).copied(),
            useful,
            unfavorable,
        }
    }

    #[test]
    fn hostile_is_taboo_that_overcomes_primary_useful() {
        let gods = GodsAnalysis::from_verdict(&verdict(
            vec![Element::Water, Element::Wood, Element::Fire],
            vec![Element::Earth, Element::Metal],
        ));
        assert_eq!(gods.primary_useful.element, Some(Element::Water));
        assert_eq!(gods.secondary_useful.element, Some(Element::Wood));
        assert_eq!(gods.unfavorable.element, Some(Element::Earth));
        assert_eq!(gods.hostile.element, Some(Element::Earth));
        assert!(gods.neutral.is_empty());
        assert_eq!(gods.neutral.description, "");
    }

    #[test]
    fn no_hostile_when_taboo_does_not_overcome_useful() {
        let gods = GodsAnalysis::from_verdict(&verdict(
            vec![Element::Earth, Element::Metal],
            vec![Element::Water, Element::Wood],
        ));
        assert!(gods.hostile.is_empty());
        assert_eq!(gods.neutral.element, Some(Element::Fire));
        assert_eq!(gods.neutral.description, NEUTRAL_DESCRIPTION);
    }

    #[test]
    fn secondary_falls_back_to_primary() {
        let gods = GodsAnalysis::from_verdict(&verdict(vec![Element::Wood], vec![]));
        assert_eq!(gods.secondary_useful.element, Some(Element::Wood));
        assert!(gods.unfavorable.is_empty());
        assert_eq!(gods.neutral.element, Some(Element::Fire));
    }

    #[test]
    fn empty_verdict_yields_empty_entries() {
        let gods = GodsAnalysis::from_verdict(&verdict(vec![], vec![]));
        assert!(gods.primary_useful.is_empty());
        assert!(gods.secondary_useful.is_empty());
        assert_eq!(gods.neutral.element, Some(Element::Wood));
    }
}
