//! Heavenly stems (天干).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cycle::{wrap, STEM_COUNT};
use super::element::Element;

/// Yin-yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the symbol at `index` (even yang, odd yin).
    pub fn of_index(index: usize) -> Polarity {
        if index % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    /// All stems in cycle order.
    pub const ALL: [Stem; STEM_COUNT] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Returns the 0-based position in the cycle.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stem at `index`, wrapping around the cycle.
    pub fn from_index(index: i64) -> Stem {
        Self::ALL[wrap(index, STEM_COUNT)]
    }

    /// Parses a single Chinese symbol.
    pub fn from_symbol(symbol: &str) -> Option<Stem> {
        Self::ALL.iter().copied().find(|s| s.symbol() == symbol)
    }

    /// The stem `steps` places away (negative steps go backwards).
    pub fn offset(&self, steps: i64) -> Stem {
        Self::from_index(self.index() as i64 + steps)
    }

    /// Two stems per element, in generation order.
    pub fn element(&self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of_index(self.index())
    }

    pub fn is_yang(&self) -> bool {
        self.polarity() == Polarity::Yang
    }

    /// Returns the Chinese symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_pair_up_by_element() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Yi.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn even_indices_are_yang() {
        for stem in Stem::ALL {
            assert_eq!(stem.is_yang(), stem.index() % 2 == 0);
        }
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Stem::Xin.offset(-21), Stem::Geng);
    }

    #[test]
    fn from_symbol_round_trips_all_stems() {
        for stem in Stem::ALL {
            assert_eq!(Stem::from_symbol(stem.symbol()), Some(stem));
        }
        assert_eq!(Stem::from_symbol("子"), None);
    }

    #[test]
    fn stem_serializes_as_symbol() {
        let json = serde_json::to_string(&Stem::Geng).unwrap();
        assert_eq!(json, "\"庚\"");
        let parsed: Stem = serde_json::from_str("\"癸\"").unwrap();
        assert_eq!(parsed, Stem::Gui);
    }
}
