//! The five elements and the generation / conquest relation between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cycle::{wrap, ELEMENT_COUNT};

/// One of the five elements, in generation order (each generates the next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// All elements in canonical 木火土金水 order.
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Returns the 0-based position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Element at `index`, wrapping around the cycle.
    pub fn from_index(index: i64) -> Element {
        Self::ALL[wrap(index, ELEMENT_COUNT)]
    }

    /// Returns the Chinese symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How one element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Same element.
    Same,
    /// The reference generates it (output).
    Generates,
    /// The reference overcomes it (wealth).
    Overcomes,
    /// It overcomes the reference (authority).
    OvercomeBy,
    /// It generates the reference (resource).
    GeneratedBy,
}

impl Relation {
    /// The same pair seen from the other side.
    pub fn reversed(&self) -> Relation {
        match self {
            Relation::Same => Relation::Same,
            Relation::Generates => Relation::GeneratedBy,
            Relation::GeneratedBy => Relation::Generates,
            Relation::Overcomes => Relation::OvercomeBy,
            Relation::OvercomeBy => Relation::Overcomes,
        }
    }
}

/// The single source of the five-element cycle.
///
/// Generation steps one place forward (木→火→土→金→水→木), conquest two
/// places forward (木→土→水→火→金→木).
pub struct ElementRelation;

impl ElementRelation {
    /// The element that generates `e`.
    pub fn generator_of(e: Element) -> Element {
        Element::from_index(e.index() as i64 - 1)
    }

    /// The element `e` generates.
    pub fn generates(e: Element) -> Element {
        Element::from_index(e.index() as i64 + 1)
    }

    /// The element `e` overcomes.
    pub fn overcomes(e: Element) -> Element {
        Element::from_index(e.index() as i64 + 2)
    }

    /// The element that overcomes `e`.
    pub fn overcome_by(e: Element) -> Element {
        Element::from_index(e.index() as i64 - 2)
    }

    /// Classifies `other` relative to `reference`.
    pub fn between(reference: Element, other: Element) -> Relation {
        if other == reference {
            Relation::Same
        } else if other == Self::generates(reference) {
            Relation::Generates
        } else if other == Self::overcomes(reference) {
            Relation::Overcomes
        } else if other == Self::overcome_by(reference) {
            Relation::OvercomeBy
        } else {
            Relation::GeneratedBy
        }
    }

    /// The element standing in `relation` to `reference`.
    pub fn element_for(reference: Element, relation: Relation) -> Element {
        match relation {
            Relation::Same => reference,
            Relation::Generates => Self::generates(reference),
            Relation::Overcomes => Self::overcomes(reference),
            Relation::OvercomeBy => Self::overcome_by(reference),
            Relation::GeneratedBy => Self::generator_of(reference),
        }
    }
}
