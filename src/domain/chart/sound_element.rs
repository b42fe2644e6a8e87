//! Sound elements (纳音) of the sixty stem-branch pairs.

use serde::Serialize;

use super::pillar::StemBranch;
use crate::domain::foundation::Element;

/// A named sound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SoundElement {
    pub name: &'static str,
    pub element: Element,
}

const fn sound(name: &'static str, element: Element) -> SoundElement {
    SoundElement { name, element }
}

/// One entry per consecutive pair of the 60-term cycle, starting at 甲子乙丑.
const SOUND_ELEMENTS: [SoundElement; 30] = [
    sound("海中金", Element::Metal),
    sound("炉中火", Element::Fire),
    sound("大林木", Element::Wood),
    sound("路旁土", Element::Earth),
    sound("剑锋金", Element::Metal),
    sound("山头火", Element::Fire),
    sound("涧下水", Element::Water),
    sound("城头土", Element::Earth),
    sound("白蜡金", Element::Metal),
    sound("杨柳木", Element::Wood),
    sound("泉中水", Element::Water),
    sound("屋上土", Element::Earth),
    sound("霹雳火", Element::Fire),
    sound("松柏木", Element::Wood),
    sound("长流水", Element::Water),
    sound("砂中金", Element::Metal),
    sound("山下火", Element::Fire),
    sound("平地木", Element::Wood),
    sound("壁上土", Element::Earth),
    sound("金箔金", Element::Metal),
    sound("覆灯火", Element::Fire),
    sound("天河水", Element::Water),
    sound("大驿土", Element::Earth),
    sound("钗钏金", Element::Metal),
    sound("桑柘木", Element::Wood),
    sound("大溪水", Element::Water),
    sound("沙中土", Element::Earth),
    sound("天上火", Element::Fire),
    sound("石榴木", Element::Wood),
    sound("大海水", Element::Water),
];

/// `None` for a pair outside the 60-term cycle.
pub fn sound_element(pair: StemBranch) -> Option<SoundElement> {
    pair.cycle_index().map(|index| SOUND_ELEMENTS[index / 2])
}
