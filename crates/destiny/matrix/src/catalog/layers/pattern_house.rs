//! Layer 6: primary pattern against occupied houses
//!
//! Every pattern has three home houses where it thrives and two strain
//! houses where it works against itself.

use super::{house_token, is_angular, tokens, HOUSE_DOMAINS};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 120;

const HOME_SCORES: [u8; 3] = [10, 9, 8];
const STRAIN_SCORES: [u8; 2] = [2, 3];

/// (home houses, strain houses, ko theme, en theme) per pattern in vocabulary order
const PATTERNS: [([usize; 3], [usize; 2], &str, &str); 10] = [
    ([10, 6, 11], [12, 8], "원칙 있는 리더십", "Principled leadership"),
    ([1, 10, 8], [7, 4], "두려움 없는 통솔", "Fearless command"),
    ([2, 6, 10], [12, 5], "신중한 관리", "Careful stewardship"),
    ([8, 5, 2], [6, 12], "사업 감각", "Venture instinct"),
    ([5, 3, 6], [10, 8], "너그러운 표현", "Generous expression"),
    ([3, 9, 11], [10, 6], "반항적 재기", "Rebellious brilliance"),
    ([4, 9, 12], [2, 10], "배움의 인내", "Learned patience"),
    ([12, 9, 8], [7, 2], "비의적 깊이", "Esoteric depth"),
    ([1, 10, 2], [8, 12], "자립의 기반", "Self-built foundation"),
    ([1, 8, 5], [7, 4], "칼날 같은 의지", "Blade-edge willpower"),
];

fn score(home: &[usize; 3], strain: &[usize; 2], house: usize) -> u8 {
    if let Some(i) = home.iter().position(|h| *h == house) {
        HOME_SCORES[i]
    } else if let Some(i) = strain.iter().position(|h| *h == house) {
        STRAIN_SCORES[i]
    } else if is_angular(house) {
        6
    } else {
        5
    }
}

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::PatternHouse,
        vec![
            Axis::Value {
                field: TraitField::PrimaryPattern,
                category: TraitCategory::Pattern,
            },
            Axis::Values {
                field: TraitField::PlanetHouses,
                category: TraitCategory::House,
            },
        ],
        CAPACITY,
    );

    for (pattern, (home, strain, theme_ko, theme_en)) in
        tokens(TraitCategory::Pattern).zip(PATTERNS)
    {
        for (house, (domain_ko, domain_en)) in (1..=12).zip(HOUSE_DOMAINS) {
            layer.cell(
                &[pattern, house_token(house)],
                score(&home, &strain, house),
                format!("{domain_ko} 영역의 {theme_ko}"),
                format!("{theme_en} in {domain_en}"),
            );
        }
    }
    layer.build()
}
