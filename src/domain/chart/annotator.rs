//! Per-pillar annotations: hidden stems, sound element, life stage,
//! void branches and symbolic markers.

use serde::Serialize;

use super::life_stage::{life_stage, LifeStage};
use super::markers::{markers_for, Marker, MarkerContext};
use super::pillar::{FourPillars, Pillar, PillarPosition};
use super::sound_element::{sound_element, SoundElement};
use super::ten_god::{TenGodAssignment, TenGodSlot};
use crate::domain::foundation::{cycle, Branch, Element, HiddenStem, Stem};

/// The two void (空亡) branches of the day pillar's decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoidBranches(pub [Branch; 2]);

impl VoidBranches {
    /// Offset of the day branch from the day stem selects the pair.
    pub fn of_day(stem: Stem, branch: Branch) -> Self {
        let diff = cycle::distance(stem.index(), branch.index(), cycle::STEM_COUNT);
        let first = Branch::from_index(diff as i64);
        Self([first, first.offset(1)])
    }

    pub fn branches(&self) -> [Branch; 2] {
        self.0
    }

    pub fn contains(&self, branch: Branch) -> bool {
        self.0.contains(&branch)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDetail {
    pub position: PillarPosition,
    pub name: &'static str,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
    pub ten_god: TenGodSlot,
    pub hidden_stems: Vec<HiddenStem>,
    pub sound_element: Option<SoundElement>,
    /// Phase of the pillar's branch relative to the day master.
    pub life_stage: LifeStage,
    /// Set on the day pillar only.
    pub self_seat: Option<Branch>,
    pub void_branches: VoidBranches,
    pub markers: Vec<Marker>,
}

pub struct AuxiliaryAnnotator;

impl AuxiliaryAnnotator {
    /// One detail per pillar in chart order. `birth_month` is the Gregorian
    /// month of the local birth date.
    pub fn annotate(
        pillars: &FourPillars,
        ten_gods: &TenGodAssignment,
        birth_month: u32,
    ) -> Vec<PillarDetail> {
        let day = pillars.day();
        let void_branches = VoidBranches::of_day(day.stem(), day.branch());
        let context = MarkerContext {
            birth_month,
            year_branch: pillars.year().branch(),
            day_branch: day.branch(),
        };

        pillars
            .iter()
            .map(|pillar| Self::detail(pillar, pillars.day_master(), ten_gods, void_branches, &context))
            .collect()
    }

    fn detail(
        pillar: Pillar,
        day_master: Stem,
        ten_gods: &TenGodAssignment,
        void_branches: VoidBranches,
        context: &MarkerContext,
    ) -> PillarDetail {
        let position = pillar.position();
        let (stem, branch) = (pillar.stem(), pillar.branch());
        PillarDetail {
            position,
            name: position.display_name(),
            stem,
            branch,
            stem_element: stem.element(),
            branch_element: branch.element(),
            ten_god: ten_gods.get(position),
            hidden_stems: branch.hidden_stems().to_vec(),
            sound_element: sound_element(pillar.pair()),
            life_stage: life_stage(day_master, branch),
            self_seat: (position == PillarPosition::Day).then_some(branch),
            void_branches,
            markers: markers_for(pillar.pair(), context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::StemBranch;

    fn geng_chen_chart() -> FourPillars {
        FourPillars::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Xin, Branch::Si),
            StemBranch::new(Stem::Geng, Branch::Chen),
            StemBranch::new(Stem::Gui, Branch::Wei),
        )
    }

    #[test]
    fn jia_zi_day_voids_zi_and_chou() {
        let void = VoidBranches::of_day(Stem::Jia, Branch::Zi);
        assert_eq!(void.branches(), [Branch::Zi, Branch::Chou]);
    }

    #[test]
    fn void_pair_follows_stem_branch_offset() {
        let void = VoidBranches::of_day(Stem::Jia, Branch::Shen);
        assert_eq!(void.branches(), [Branch::Shen, Branch::You]);
        let void = VoidBranches::of_day(Stem::Gui, Branch::Chou);
        assert_eq!(void.branches(), [Branch::Yin, Branch::Mao]);
    }

    #[test]
    fn void_branches_are_always_distinct() {
        for stem in Stem::ALL {
            for branch in Branch::ALL {
                let [a, b] = VoidBranches::of_day(stem, branch).branches();
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn annotates_every_pillar_in_order() {
        let pillars = geng_chen_chart();
        let details = AuxiliaryAnnotator::annotate(&pillars, &TenGodAssignment::of(&pillars), 5);

        assert_eq!(details.len(), 4);
        let positions: Vec<_> = details.iter().map(|d| d.position).collect();
        assert_eq!(positions, PillarPosition::ALL.to_vec());
        assert_eq!(details[2].ten_god, TenGodSlot::DayMaster);
        assert_eq!(details[2].self_seat, Some(Branch::Chen));
        assert_eq!(details.iter().filter(|d| d.self_seat.is_some()).count(), 1);
    }

    #[test]
    fn shared_void_pair_and_phases() {
        let pillars = geng_chen_chart();
        let details = AuxiliaryAnnotator::annotate(&pillars, &TenGodAssignment::of(&pillars), 5);

        for detail in &details {
            assert_eq!(detail.void_branches.branches(), [Branch::Shen, Branch::You]);
        }
        let stages: Vec<_> = details.iter().map(|d| d.life_stage).collect();
        assert_eq!(
            stages,
            vec![LifeStage::Bath, LifeStage::Birth, LifeStage::Nurture, LifeStage::Crown]
        );
        let sounds: Vec<_> = details
            .iter()
            .map(|d| d.sound_element.map(|s| s.name))
            .collect();
        assert_eq!(
            sounds,
            vec![Some("路旁土"), Some("白蜡金"), Some("白蜡金"), Some("杨柳木")]
        );
    }

    #[test]
    fn hidden_stems_come_from_branch_table() {
        let pillars = geng_chen_chart();
        let details = AuxiliaryAnnotator::annotate(&pillars, &TenGodAssignment::of(&pillars), 5);
        let wu: Vec<_> = details[0].hidden_stems.iter().map(|h| (h.stem, h.weight)).collect();
        assert_eq!(wu, vec![(Stem::Ding, 7), (Stem::Ji, 3)]);
    }
}
