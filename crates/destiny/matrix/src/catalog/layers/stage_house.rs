//! Layer 4: growth stages against occupied houses
//!
//! Each stage carries a vitality score. Angular houses amplify it, cadent
//! houses damp it, succedent houses leave it unchanged.

use super::{house_token, is_angular, is_cadent, tokens, HOUSE_DOMAINS};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 144;

/// (vitality, ko theme, en theme) per stage in vocabulary order
const STAGES: [(i32, &str, &str); 12] = [
    (7, "새 출발", "Fresh start"),
    (5, "불안한 노출", "Unsettled exposure"),
    (7, "오르는 자신감", "Rising confidence"),
    (9, "자수성가의 힘", "Self-made strength"),
    (9, "절정의 힘", "Peak power"),
    (5, "원숙한 쇠퇴", "Mellowing"),
    (3, "약해진 기운", "Fragile energy"),
    (2, "멈춤", "Stillness"),
    (4, "저장된 기운", "Stored reserves"),
    (2, "끊어진 흐름", "Severed thread"),
    (5, "잠재된 씨앗", "Latent seed"),
    (6, "조용한 양육", "Quiet nurturing"),
];

fn score(vitality: i32, house: usize) -> u8 {
    let shift = if vitality >= 7 {
        1
    } else if vitality <= 3 {
        -1
    } else {
        0
    };
    let adjusted = if is_angular(house) {
        vitality + shift
    } else if is_cadent(house) {
        vitality - shift
    } else {
        vitality
    };
    super::clamp_score(adjusted)
}

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::StageHouse,
        vec![
            Axis::Keys {
                field: TraitField::StageDistribution,
                category: TraitCategory::Stage,
            },
            Axis::Values {
                field: TraitField::PlanetHouses,
                category: TraitCategory::House,
            },
        ],
        CAPACITY,
    );

    for (stage, (vitality, theme_ko, theme_en)) in tokens(TraitCategory::Stage).zip(STAGES) {
        for (house, (domain_ko, domain_en)) in (1..=12).zip(HOUSE_DOMAINS) {
            layer.cell(
                &[stage, house_token(house)],
                score(vitality, house),
                format!("{domain_ko} 영역의 {theme_ko}"),
                format!("{theme_en} in {domain_en}"),
            );
        }
    }
    layer.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angularity() {
        assert_eq!(score(9, 10), 10);
        assert_eq!(score(9, 9), 8);
        assert_eq!(score(9, 2), 9);
        assert_eq!(score(2, 1), 1);
        assert_eq!(score(2, 12), 3);
        assert_eq!(score(5, 1), 5);
    }

    #[test]
    fn test_cells() {
        let layer = definition().unwrap();
        let record = layer.lookup("peak|10").unwrap();
        assert_eq!(record.score.value(), 10);
        assert_eq!(record.keyword.en, "Peak power in career");
        assert_eq!(record.keyword.ko, "직업 영역의 절정의 힘");
    }
}
