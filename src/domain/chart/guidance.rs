//! Personality tags, lucky suggestion and element kinship derived from a chart.

use serde::Serialize;

use super::energy::ElementScoreBoard;
use super::pattern::Pattern;
use super::strength::{ElementRoles, StrengthVerdict};
use super::ten_god::TenGod;
use crate::domain::foundation::{Element, Stem};

/// Upper bound on personality tags.
pub const MAX_TAGS: usize = 5;

const PATTERN_TAGS_USED: usize = 2;

fn day_stem_tags(stem: Stem) -> [&'static str; 3] {
    match stem {
        Stem::Jia => ["正直", "积极", "有领导力"],
        Stem::Yi => ["温和", "细腻", "有韧性"],
        Stem::Bing => ["热情", "光明", "积极"],
        Stem::Ding => ["细致", "温暖", "有耐心"],
        Stem::Wu => ["诚实", "稳重", "包容"],
        Stem::Ji => ["温和", "包容", "有责任感"],
        Stem::Geng => ["刚强", "果断", "有原则"],
        Stem::Xin => ["细腻", "精致", "有毅力"],
        Stem::Ren => ["聪明", "灵动", "格局大"],
        Stem::Gui => ["温柔", "智慧", "适应力强"],
    }
}

fn pattern_tags(pattern: Pattern) -> &'static [&'static str] {
    match pattern.ten_god() {
        Some(TenGod::EatingGod) => &["有创造力", "善于表达"],
        Some(TenGod::HurtingOfficer) => &["才华横溢", "不拘一格"],
        Some(TenGod::DirectOfficer) => &["有责任感", "遵守规则"],
        Some(TenGod::SevenKillings) => &["有魄力", "敢于冒险"],
        Some(TenGod::DirectResource) => &["有智慧", "善于学习"],
        Some(TenGod::IndirectResource) => &["思维独特", "有洞察力"],
        Some(TenGod::DirectWealth) => &["务实", "善于理财"],
        Some(TenGod::IndirectWealth) => &["灵活", "善于把握机会"],
        Some(TenGod::Companion) => &["独立", "有主见"],
        Some(TenGod::RobWealth) => &["竞争意识强", "有冲劲"],
        None => &[],
    }
}

/// Day-stem traits, then pattern traits, then a strength trait; unique, at most five.
pub fn personality_tags(day_master: Stem, pattern: Pattern, is_strong: bool) -> Vec<String> {
    let strength_tag = if is_strong { "自信" } else { "谦逊" };
    let candidates = day_stem_tags(day_master)
        .into_iter()
        .chain(pattern_tags(pattern).iter().copied().take(PATTERN_TAGS_USED))
        .chain(std::iter::once(strength_tag));

    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);
    for tag in candidates {
        if tags.len() == MAX_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Colours and direction associated with the primary useful element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckySuggestion {
    pub colors: String,
    pub direction: String,
    pub element: Option<Element>,
}

impl LuckySuggestion {
    pub fn for_element(element: Option<Element>) -> Self {
        let (colors, direction) = match element {
            Some(Element::Wood) => ("绿色、青色", "东方"),
            Some(Element::Fire) => ("红色、紫色", "南方"),
            Some(Element::Earth) => ("黄色、棕色", "中央"),
            Some(Element::Metal) => ("白色、金色", "西方"),
            Some(Element::Water) => ("黑色、蓝色", "北方"),
            None => ("", ""),
        };
        Self {
            colors: colors.to_string(),
            direction: direction.to_string(),
            element,
        }
    }
}

/// Present elements split into those supporting the day master (同类)
/// and those draining it (异类).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementKinship {
    pub same_kind: Vec<Element>,
    pub different_kind: Vec<Element>,
}

impl ElementKinship {
    pub fn of(day_master: Element, board: &ElementScoreBoard) -> Self {
        let roles = ElementRoles::of(day_master);
        let present = |e: &Element| board.score(*e) > 0;
        Self {
            same_kind: roles.supporting().into_iter().filter(present).collect(),
            different_kind: roles.draining().into_iter().filter(present).collect(),
        }
    }
}

/// Everything the guidance section of a report carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub personality_tags: Vec<String>,
    pub lucky: LuckySuggestion,
    pub kinship: ElementKinship,
}

impl Guidance {
    pub fn derive(
        day_master: Stem,
        pattern: Pattern,
        verdict: &StrengthVerdict,
        board: &ElementScoreBoard,
    ) -> Self {
        Self {
            personality_tags: personality_tags(day_master, pattern, verdict.is_strong),
            lucky: LuckySuggestion::for_element(verdict.primary_useful()),
            kinship: ElementKinship::of(day_master.element(), board),
        }
    }
}
