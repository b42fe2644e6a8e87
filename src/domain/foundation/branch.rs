//! Earthly branches (地支) and their hidden stems (藏干).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cycle::{wrap, BRANCH_COUNT};
use super::element::Element;
use super::stem::{Polarity, Stem};

/// Total weight carried by the hidden stems of every branch.
pub const HIDDEN_WEIGHT_TOTAL: u32 = 10;

/// A stem concealed inside a branch, with its share of the branch's qi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: u32,
}

const fn hs(stem: Stem, weight: u32) -> HiddenStem {
    HiddenStem { stem, weight }
}

// Main qi first, then middle and residual qi. The main qi holds what the
// middle (3) and residual (1) qi leave of the branch total.
const HIDDEN_STEMS: [&[HiddenStem]; BRANCH_COUNT] = [
    &[hs(Stem::Gui, 10)],
    &[hs(Stem::Ji, 6), hs(Stem::Gui, 3), hs(Stem::Xin, 1)],
    &[hs(Stem::Jia, 6), hs(Stem::Bing, 3), hs(Stem::Wu, 1)],
    &[hs(Stem::Yi, 10)],
    &[hs(Stem::Wu, 6), hs(Stem::Yi, 3), hs(Stem::Gui, 1)],
    &[hs(Stem::Bing, 6), hs(Stem::Wu, 3), hs(Stem::Geng, 1)],
    &[hs(Stem::Ding, 7), hs(Stem::Ji, 3)],
    &[hs(Stem::Ji, 6), hs(Stem::Ding, 3), hs(Stem::Yi, 1)],
    &[hs(Stem::Geng, 6), hs(Stem::Ren, 3), hs(Stem::Wu, 1)],
    &[hs(Stem::Xin, 10)],
    &[hs(Stem::Wu, 6), hs(Stem::Xin, 3), hs(Stem::Ding, 1)],
    &[hs(Stem::Ren, 7), hs(Stem::Jia, 3)],
];

const BRANCH_ELEMENTS: [Element; BRANCH_COUNT] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    /// All branches in cycle order.
    pub const ALL: [Branch; BRANCH_COUNT] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Returns the 0-based position in the cycle.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Branch at `index`, wrapping around the cycle.
    pub fn from_index(index: i64) -> Branch {
        Self::ALL[wrap(index, BRANCH_COUNT)]
    }

    /// Parses a single Chinese symbol.
    pub fn from_symbol(symbol: &str) -> Option<Branch> {
        Self::ALL.iter().copied().find(|b| b.symbol() == symbol)
    }

    /// The branch `steps` places away (negative steps go backwards).
    pub fn offset(&self, steps: i64) -> Branch {
        Self::from_index(self.index() as i64 + steps)
    }

    pub fn element(&self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// Hidden stems, main qi first. Weights sum to [`HIDDEN_WEIGHT_TOTAL`].
    pub fn hidden_stems(&self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.index()]
    }

    /// The main-qi hidden stem.
    pub fn main_qi(&self) -> Option<Stem> {
        self.hidden_stems().first().map(|h| h.stem)
    }

    /// Lunar month number this branch governs (寅 = 1 … 丑 = 12).
    pub fn month_ordinal(&self) -> u32 {
        wrap(self.index() as i64 - 2, BRANCH_COUNT) as u32 + 1
    }

    /// Returns the Chinese symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
