//! Dominant archetype (格局) of a chart.

use serde::{Serialize, Serializer};
use std::fmt;

use super::pillar::FourPillars;
use super::ten_god::{TenGod, TenGodAssignment, TenGodClassifier};

/// One of the ten ten-god patterns, or the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    TenGod(TenGod),
    Generic,
}

impl Pattern {
    pub fn name(&self) -> String {
        match self {
            Pattern::TenGod(god) => format!("{}格", god.display_name()),
            Pattern::Generic => "正格".to_string(),
        }
    }

    pub fn ten_god(&self) -> Option<TenGod> {
        match self {
            Pattern::TenGod(god) => Some(*god),
            Pattern::Generic => None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// Which cascade step produced the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSource {
    MonthStem,
    MonthBranch,
    HourStem,
    YearStem,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternResolution {
    pub pattern: Pattern,
    pub source: PatternSource,
}

pub struct PatternClassifier;

impl PatternClassifier {
    pub fn classify(pillars: &FourPillars, ten_gods: &TenGodAssignment) -> Pattern {
        Self::resolve(pillars, ten_gods).pattern
    }

    /// First match wins: month stem, month branch main qi, hour stem, year stem.
    ///
    /// Stem steps read the chart's ten-god assignment, so a stem equal to the
    /// day master names 比肩格. Only a self slot falls through.
    pub fn resolve(pillars: &FourPillars, ten_gods: &TenGodAssignment) -> PatternResolution {
        let day = pillars.day_master();
        let main_qi = pillars
            .month()
            .branch()
            .main_qi()
            .map(|stem| TenGodClassifier::ten_god(day, stem));
        let candidates: [(PatternSource, Option<TenGod>); 4] = [
            (PatternSource::MonthStem, ten_gods.month.god()),
            (PatternSource::MonthBranch, main_qi),
            (PatternSource::HourStem, ten_gods.hour.god()),
            (PatternSource::YearStem, ten_gods.year.god()),
        ];

        candidates
            .iter()
            .find_map(|(source, god)| {
                Some(PatternResolution {
                    pattern: Pattern::TenGod((*god)?),
                    source: *source,
                })
            })
            .unwrap_or(PatternResolution {
                pattern: Pattern::Generic,
                source: PatternSource::Fallback,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::StemBranch;
    use crate::domain::chart::TenGodSlot;
    use crate::domain::foundation::{Branch, Stem};

    fn chart(pairs: [(Stem, Branch); 4]) -> FourPillars {
        let [y, m, d, h] = pairs.map(|(s, b)| StemBranch::new(s, b));
        FourPillars::new(y, m, d, h)
    }

    fn resolve(pillars: &FourPillars) -> PatternResolution {
        PatternClassifier::resolve(pillars, &TenGodAssignment::of(pillars))
    }

    #[test]
    fn month_stem_eating_god_names_pattern() {
        let pillars = chart([
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Yin),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
        ]);
        let resolution = resolve(&pillars);
        assert_eq!(resolution.pattern, Pattern::TenGod(TenGod::EatingGod));
        assert_eq!(resolution.pattern.name(), "食神格");
        assert_eq!(resolution.source, PatternSource::MonthStem);
    }

    #[test]
    fn month_stem_equal_to_day_master_is_companion_pattern() {
        let pillars = chart([
            (Stem::Bing, Branch::Yin),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
        ]);
        let ten_gods = TenGodAssignment::of(&pillars);
        assert_eq!(ten_gods.month, TenGodSlot::God(TenGod::Companion));

        let resolution = PatternClassifier::resolve(&pillars, &ten_gods);
        assert_eq!(resolution.pattern.name(), "比肩格");
        assert_eq!(resolution.source, PatternSource::MonthStem);
    }

    #[test]
    fn pattern_agrees_with_month_ten_god() {
        for month_stem in Stem::ALL {
            let pillars = chart([
                (Stem::Wu, Branch::Zi),
                (month_stem, Branch::Yin),
                (Stem::Jia, Branch::Zi),
                (Stem::Ding, Branch::Mao),
            ]);
            let ten_gods = TenGodAssignment::of(&pillars);
            assert_eq!(
                PatternClassifier::classify(&pillars, &ten_gods).ten_god(),
                ten_gods.month.god()
            );
        }
    }

    #[test]
    fn self_month_slot_falls_through_to_branch_main_qi() {
        let pillars = chart([
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::You),
            (Stem::Jia, Branch::Zi),
            (Stem::Jia, Branch::Zi),
        ]);
        let ten_gods = TenGodAssignment {
            month: TenGodSlot::DayMaster,
            ..TenGodAssignment::of(&pillars)
        };
        let resolution = PatternClassifier::resolve(&pillars, &ten_gods);
        assert_eq!(resolution.pattern, Pattern::TenGod(TenGod::DirectOfficer));
        assert_eq!(resolution.source, PatternSource::MonthBranch);
    }

    #[test]
    fn geng_chen_chart_is_rob_wealth_pattern() {
        let pillars = chart([
            (Stem::Geng, Branch::Wu),
            (Stem::Xin, Branch::Si),
            (Stem::Geng, Branch::Chen),
            (Stem::Gui, Branch::Wei),
        ]);
        assert_eq!(resolve(&pillars).pattern.name(), "劫财格");
    }

    #[test]
    fn identical_stems_name_companion_pattern() {
        let pillars = chart([
            (Stem::Yi, Branch::Mao),
            (Stem::Yi, Branch::Mao),
            (Stem::Yi, Branch::Mao),
            (Stem::Yi, Branch::Mao),
        ]);
        assert_eq!(resolve(&pillars).pattern, Pattern::TenGod(TenGod::Companion));
    }

    #[test]
    fn generic_pattern_is_named_zheng_ge() {
        assert_eq!(Pattern::Generic.to_string(), "正格");
        assert_eq!(Pattern::Generic.ten_god(), None);
    }

    #[test]
    fn pattern_serializes_as_name() {
        let json = serde_json::to_string(&Pattern::TenGod(TenGod::SevenKillings)).unwrap();
        assert_eq!(json, "\"七杀格\"");
    }
}
