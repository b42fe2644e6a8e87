//! Five-element energy distribution over the four pillars.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pillar::{FourPillars, PillarPosition};
use crate::domain::foundation::Element;

/// Points a visible stem or a branch's main element contributes.
pub const VISIBLE_POINTS: u32 = 5;

/// Relative standing of an element within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementStatus {
    #[serde(rename = "旺")]
    Thriving,
    #[serde(rename = "相")]
    Assisting,
    #[serde(rename = "休")]
    Resting,
    #[serde(rename = "囚")]
    Confined,
    #[serde(rename = "死")]
    Dead,
}

impl ElementStatus {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementStatus::Thriving => "旺",
            ElementStatus::Assisting => "相",
            ElementStatus::Resting => "休",
            ElementStatus::Confined => "囚",
            ElementStatus::Dead => "死",
        }
    }
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where a contribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Stem,
    Branch,
    HiddenStem,
}

/// One scoring step, kept for explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub position: PillarPosition,
    pub source: ScoreSource,
    pub symbol: String,
    pub element: Element,
    pub points: u32,
}

/// Score line of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementScore {
    pub element: Element,
    pub score: u32,
    /// Share of the total, rounded to two decimals.
    pub percentage: f64,
    /// 1-based rank by descending score.
    pub rank: usize,
    pub status: ElementStatus,
}

/// Weighted element scores for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementScoreBoard {
    /// In canonical 木火土金水 order.
    pub scores: Vec<ElementScore>,
    pub total: u32,
    pub strongest: Element,
    pub weakest: Element,
    /// Elements with no score at all.
    pub missing: Vec<Element>,
    pub contributions: Vec<ScoreContribution>,
}

impl ElementScoreBoard {
    pub fn score(&self, element: Element) -> u32 {
        self.entry(element).score
    }

    pub fn percentage(&self, element: Element) -> f64 {
        self.entry(element).percentage
    }

    pub fn status(&self, element: Element) -> ElementStatus {
        self.entry(element).status
    }

    pub fn entry(&self, element: Element) -> &ElementScore {
        &self.scores[element.index()]
    }

    /// "缺X…" for missing elements, "五行齐全" when every element is present.
    pub fn missing_summary(&self) -> String {
        if self.missing.is_empty() {
            "五行齐全".to_string()
        } else {
            let names: String = self.missing.iter().map(|e| e.symbol()).collect();
            format!("缺{}", names)
        }
    }
}

/// Aggregates visible and hidden element weights.
pub struct FiveElementEnergyAnalyzer;

impl FiveElementEnergyAnalyzer {
    pub fn score(pillars: &FourPillars) -> ElementScoreBoard {
        let mut raw = [0u32; 5];
        let mut contributions = Vec::new();

        let mut add = |position, source, symbol: &str, element: Element, points: u32| {
            raw[element.index()] += points;
            contributions.push(ScoreContribution {
                position,
                source,
                symbol: symbol.to_string(),
                element,
                points,
            });
        };

        for pillar in pillars.iter() {
            let position = pillar.position();
            let stem = pillar.stem();
            let branch = pillar.branch();
            add(position, ScoreSource::Stem, stem.symbol(), stem.element(), VISIBLE_POINTS);
            add(position, ScoreSource::Branch, branch.symbol(), branch.element(), VISIBLE_POINTS);
            for hidden in branch.hidden_stems() {
                add(
                    position,
                    ScoreSource::HiddenStem,
                    hidden.stem.symbol(),
                    hidden.stem.element(),
                    hidden.weight,
                );
            }
        }

        Self::from_raw(raw, contributions)
    }

    /// Ranks raw scores and derives percentages and status labels.
    ///
    /// Ties keep canonical element order, so the first-listed element of a
    /// tie ranks higher.
    pub fn from_raw(raw: [u32; 5], contributions: Vec<ScoreContribution>) -> ElementScoreBoard {
        let total: u32 = raw.iter().sum();

        let mut ranked: Vec<Element> = Element::ALL.to_vec();
        ranked.sort_by(|a, b| raw[b.index()].cmp(&raw[a.index()]));
        let last = ranked.len() - 1;

        let scores = Element::ALL
            .iter()
            .map(|element| {
                let position = ranked.iter().position(|e| e == element).unwrap_or(last);
                let score = raw[element.index()];
                ElementScore {
                    element: *element,
                    score,
                    percentage: percentage_of(score, total),
                    rank: position + 1,
                    status: status_for_rank(position, last),
                }
            })
            .collect();

        ElementScoreBoard {
            scores,
            total,
            strongest: ranked[0],
            weakest: ranked[last],
            missing: Element::ALL
                .iter()
                .copied()
                .filter(|e| raw[e.index()] == 0)
                .collect(),
            contributions,
        }
    }
}

fn percentage_of(score: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(score) / f64::from(total) * 10_000.0).round() / 100.0
}

fn status_for_rank(position: usize, last: usize) -> ElementStatus {
    match position {
        0 => ElementStatus::Thriving,
        p if p == last => ElementStatus::Dead,
        1 => ElementStatus::Assisting,
        p if p + 1 == last => ElementStatus::Confined,
        _ => ElementStatus::Resting,
    }
}
