//! Chart module - the Four Pillars calculation engine.
//!
//! Every component is a pure function of already-validated input. The
//! assembly order is: true solar time, pillars, ten gods, element energy,
//! strength, gods analysis, pattern, luck cycles, per-pillar annotations
//! and guidance, composed by [`ReportAssembler`].

mod annotator;
mod birth;
mod energy;
mod gods;
mod guidance;
mod life_stage;
mod luck_cycle;
mod markers;
mod pattern;
mod pillar;
mod pillar_builder;
mod report;
mod solar_time;
mod sound_element;
mod strength;
mod ten_god;
mod timeline;

pub use annotator::{AuxiliaryAnnotator, PillarDetail, VoidBranches};
pub use birth::{parse_local_datetime, BirthInput, Gender, SUPPORTED_YEARS};
pub use energy::{
    ElementScore, ElementScoreBoard, ElementStatus, FiveElementEnergyAnalyzer, ScoreContribution,
    ScoreSource, VISIBLE_POINTS,
};
pub use gods::{GodEntry, GodsAnalysis};
pub use guidance::{personality_tags, ElementKinship, Guidance, LuckySuggestion, MAX_TAGS};
pub use life_stage::{life_stage, LifeStage};
pub use luck_cycle::{
    LuckCycle, LuckCycleGenerator, LuckCycles, LuckDirection, LUCK_CYCLE_COUNT, YEARS_PER_CYCLE,
};
pub use markers::{markers_for, Marker, MarkerContext};
pub use pattern::{Pattern, PatternClassifier, PatternResolution, PatternSource};
pub use pillar::{FourPillars, Pillar, PillarPosition, StemBranch};
pub use pillar_builder::PillarBuilder;
pub use report::{Report, ReportAssembler};
pub use solar_time::{TrueSolarTimeCorrector, DEFAULT_STANDARD_MERIDIAN};
pub use sound_element::{sound_element, SoundElement};
pub use strength::{ElementRoles, StrengthCategory, StrengthEvaluator, StrengthVerdict};
pub use ten_god::{TenGod, TenGodAssignment, TenGodClassifier, TenGodSlot};
pub use timeline::{annual_pillar, AnnualEntry, AnnualTimeline};
