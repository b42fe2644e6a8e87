//! The assembled chart report.

use chrono::{Datelike, NaiveDateTime, SubsecRound};
use serde::Serialize;

use super::annotator::{AuxiliaryAnnotator, PillarDetail};
use super::birth::{BirthInput, Gender};
use super::energy::{ElementScoreBoard, FiveElementEnergyAnalyzer};
use super::gods::GodsAnalysis;
use super::guidance::Guidance;
use super::luck_cycle::{LuckCycleGenerator, LuckCycles};
use super::pattern::{Pattern, PatternClassifier};
use super::pillar::FourPillars;
use super::pillar_builder::PillarBuilder;
use super::solar_time::TrueSolarTimeCorrector;
use super::strength::{StrengthEvaluator, StrengthVerdict};
use super::ten_god::TenGodAssignment;
use super::timeline::AnnualTimeline;
use crate::domain::foundation::{Element, Stem};
use crate::ports::CalendarOracle;

/// Immutable result of charting one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    gender: Gender,
    local_time: NaiveDateTime,
    /// Rounded to whole seconds.
    true_solar_time: NaiveDateTime,
    #[serde(skip)]
    exact_solar_time: NaiveDateTime,
    longitude: f64,
    latitude: Option<f64>,
    pillars: FourPillars,
    day_master: Stem,
    day_master_element: Element,
    ten_gods: TenGodAssignment,
    energy: ElementScoreBoard,
    strength: StrengthVerdict,
    gods: GodsAnalysis,
    pattern: Pattern,
    luck_cycles: LuckCycles,
    pillar_details: Vec<PillarDetail>,
    guidance: Guidance,
}

impl Report {
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn local_time(&self) -> NaiveDateTime {
        self.local_time
    }

    pub fn true_solar_time(&self) -> NaiveDateTime {
        self.true_solar_time
    }

    /// The unrounded true solar time the pillars were derived from.
    pub fn exact_solar_time(&self) -> NaiveDateTime {
        self.exact_solar_time
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn pillars(&self) -> &FourPillars {
        &self.pillars
    }

    pub fn day_master(&self) -> Stem {
        self.day_master
    }

    pub fn day_master_element(&self) -> Element {
        self.day_master_element
    }

    pub fn ten_gods(&self) -> &TenGodAssignment {
        &self.ten_gods
    }

    pub fn energy(&self) -> &ElementScoreBoard {
        &self.energy
    }

    pub fn strength(&self) -> &StrengthVerdict {
        &self.strength
    }

    pub fn gods(&self) -> &GodsAnalysis {
        &self.gods
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn luck_cycles(&self) -> &LuckCycles {
        &self.luck_cycles
    }

    pub fn pillar_details(&self) -> &[PillarDetail] {
        &self.pillar_details
    }

    pub fn guidance(&self) -> &Guidance {
        &self.guidance
    }

    /// Annual timeline from the true-solar birth year for `years` years.
    pub fn timeline(&self, years: u32) -> AnnualTimeline {
        AnnualTimeline::build(self.exact_solar_time.year(), &self.luck_cycles, years)
    }
}

/// Composes every calculation into a [`Report`].
pub struct ReportAssembler<'a> {
    oracle: &'a dyn CalendarOracle,
    corrector: TrueSolarTimeCorrector,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(oracle: &'a dyn CalendarOracle, corrector: TrueSolarTimeCorrector) -> Self {
        Self { oracle, corrector }
    }

    pub fn assemble(&self, birth: &BirthInput) -> Report {
        let exact_solar_time = self.corrector.correct(birth.local_time(), birth.longitude());
        let pillars = PillarBuilder::build(self.oracle, exact_solar_time);
        let day_master = pillars.day_master();

        let ten_gods = TenGodAssignment::of(&pillars);
        let energy = FiveElementEnergyAnalyzer::score(&pillars);
        let strength = StrengthEvaluator::evaluate(&pillars, &energy);
        let gods = GodsAnalysis::from_verdict(&strength);
        let pattern = PatternClassifier::classify(&pillars, &ten_gods);
        let luck_cycles = LuckCycleGenerator::generate(&pillars, birth.gender());
        let pillar_details =
            AuxiliaryAnnotator::annotate(&pillars, &ten_gods, birth.local_time().month());
        let guidance = Guidance::derive(day_master, pattern, &strength, &energy);

        Report {
            gender: birth.gender(),
            local_time: birth.local_time(),
            true_solar_time: exact_solar_time.round_subsecs(0),
            exact_solar_time,
            longitude: birth.longitude(),
            latitude: birth.latitude(),
            pillars,
            day_master,
            day_master_element: day_master.element(),
            ten_gods,
            energy,
            strength,
            gods,
            pattern,
            luck_cycles,
            pillar_details,
            guidance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::StemBranch;
    use crate::domain::foundation::Branch;
    use crate::ports::SexagenaryDate;
    use chrono::NaiveDate;

    struct FixedOracle;

    impl CalendarOracle for FixedOracle {
        fn convert(&self, _date: NaiveDate) -> SexagenaryDate {
            SexagenaryDate {
                year: StemBranch::new(Stem::Geng, Branch::Wu),
                month: StemBranch::new(Stem::Xin, Branch::Si),
                day: StemBranch::new(Stem::Geng, Branch::Chen),
            }
        }
    }

    fn report() -> Report {
        let birth = BirthInput::parse("1990-05-15", "14:30", 116.4074, Some(39.9042), Gender::Male)
            .unwrap();
        ReportAssembler::new(&FixedOracle, TrueSolarTimeCorrector::default()).assemble(&birth)
    }

    #[test]
    fn assembles_pillars_and_classifications() {
        let report = report();
        assert_eq!(report.pillars().to_string(), "庚午 辛巳 庚辰 癸未");
        assert_eq!(report.day_master(), Stem::Geng);
        assert_eq!(report.day_master_element(), Element::Metal);
        assert_eq!(report.pattern().name(), "劫财格");
        assert_eq!(report.gods().primary_useful.element, Some(Element::Water));
        assert_eq!(report.pillar_details().len(), 4);
    }

    #[test]
    fn true_solar_time_drives_the_hour() {
        let report = report();
        assert_eq!(report.true_solar_time().to_string(), "1990-05-15 14:15:38");
        assert_eq!(report.local_time().to_string(), "1990-05-15 14:30:00");
        assert!(report.exact_solar_time() < report.true_solar_time());
    }

    #[test]
    fn hour_pillar_uses_unrounded_solar_time() {
        // 13:00 local, 0.4 s west of the meridian: 12:59:59.6 is still 午
        let birth = BirthInput::parse("1990-05-15", "13:00", 120.0 - 1.0 / 600.0, None, Gender::Male)
            .unwrap();
        let report =
            ReportAssembler::new(&FixedOracle, TrueSolarTimeCorrector::default()).assemble(&birth);
        assert_eq!(report.pillars().hour().branch(), Branch::Wu);
        assert_eq!(report.true_solar_time().to_string(), "1990-05-15 13:00:00");
    }

    #[test]
    fn assembly_is_deterministic() {
        assert_eq!(report(), report());
    }

    #[test]
    fn timeline_starts_at_birth_year() {
        let timeline = report().timeline(5);
        assert_eq!(timeline.birth_year, 1990);
        assert_eq!(timeline.entries.len(), 6);
    }
}
