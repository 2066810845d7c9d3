//! Layer 1: dominant element against the tropical element

use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 20;

/// (element, western element, score, ko, en)
const CELLS: [(&str, &str, u8, &str, &str); 20] = [
    ("wood", "fire", 8, "불붙은 비전", "Kindled vision"),
    ("wood", "earth", 4, "뿌리내린 정체", "Rooted but stalled"),
    ("wood", "air", 9, "바람을 탄 성장", "Wind-borne growth"),
    ("wood", "water", 8, "양분 받은 성장", "Nourished growth"),
    ("fire", "fire", 10, "타오르는 추진력", "Blazing drive"),
    ("fire", "earth", 7, "따뜻한 실용성", "Warm practicality"),
    ("fire", "air", 8, "바람이 키운 불꽃", "Fanned flame"),
    ("fire", "water", 2, "증기와 연기", "Steam and smoke"),
    ("earth", "fire", 8, "단련된 안정", "Forged stability"),
    ("earth", "earth", 9, "반석 같은 인내", "Bedrock endurance"),
    ("earth", "air", 3, "흩어지는 토대", "Scattered ground"),
    ("earth", "water", 4, "질퍽한 발판", "Muddied footing"),
    ("metal", "fire", 2, "녹아내리는 결단", "Melting resolve"),
    ("metal", "earth", 8, "정련된 원석", "Refined ore"),
    ("metal", "air", 5, "차가운 정밀함", "Cool precision"),
    ("metal", "water", 7, "맑은 물줄기", "Clear current"),
    ("water", "fire", 3, "끓어오르는 긴장", "Boiling tension"),
    ("water", "earth", 3, "막힌 흐름", "Dammed flow"),
    ("water", "air", 6, "떠도는 안개", "Drifting mist"),
    ("water", "water", 10, "깊은 조류", "Deep tide"),
];

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::ElementCore,
        vec![
            Axis::Value {
                field: TraitField::DominantElement,
                category: TraitCategory::Element,
            },
            Axis::Value {
                field: TraitField::WesternElement,
                category: TraitCategory::WesternElement,
            },
        ],
        CAPACITY,
    );
    for (element, western, score, ko, en) in CELLS {
        layer.cell(&[element, western], score, ko, en);
    }
    layer.build()
}
