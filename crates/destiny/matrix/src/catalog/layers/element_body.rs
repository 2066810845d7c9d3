//! Layer 10: dominant element against minor bodies by house
//!
//! Sparse: a body only scores in its three domain houses, strongest in the
//! first.

use super::{house_token, labels, tokens, HOUSE_DOMAINS};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 300;

/// (domain houses, ko theme, en theme) per body in vocabulary order
const BODIES: [([usize; 3], &str, &str); 5] = [
    ([1, 6, 12], "치유의 상처", "Healing wound"),
    ([4, 6, 2], "양육의 돌봄", "Nourishing care"),
    ([3, 9, 11], "전략적 지혜", "Strategic wisdom"),
    ([7, 5, 8], "헌신의 결합", "Committed bond"),
    ([6, 9, 12], "신성한 몰입", "Sacred focus"),
];

/// Shift by position within a body's domain houses
const DOMAIN_SHIFT: [i32; 3] = [1, 0, -1];

/// Rows follow the element vocabulary, columns the body vocabulary
const AFFINITY: [[i32; 5]; 5] = [
    [6, 7, 8, 5, 6],
    [5, 4, 7, 8, 9],
    [7, 9, 5, 6, 7],
    [4, 5, 8, 6, 7],
    [8, 7, 6, 7, 3],
];

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::ElementBody,
        vec![
            Axis::Value {
                field: TraitField::DominantElement,
                category: TraitCategory::Element,
            },
            Axis::Entries {
                field: TraitField::MinorBodyHouses,
                key: TraitCategory::MinorBody,
                value: TraitCategory::House,
            },
        ],
        CAPACITY,
    );

    for (element, affinities) in tokens(TraitCategory::Element).zip(AFFINITY) {
        let (element_ko, element_en) = labels(TraitCategory::Element, element);
        for ((body, (houses, theme_ko, theme_en)), affinity) in tokens(TraitCategory::MinorBody)
            .zip(BODIES)
            .zip(affinities)
        {
            for (house, shift) in houses.into_iter().zip(DOMAIN_SHIFT) {
                let (domain_ko, domain_en) = HOUSE_DOMAINS[house - 1];
                layer.cell(
                    &[element, body, house_token(house)],
                    super::clamp_score(affinity + shift),
                    format!("{domain_ko} 영역의 {theme_ko} · {element_ko} 기운"),
                    format!("{theme_en} in {domain_en}, {element_en} tone"),
                );
            }
        }
    }
    layer.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_size() {
        assert_eq!(definition().unwrap().cell_count(), 75);
    }

    #[test]
    fn test_cells() {
        let layer = definition().unwrap();
        let record = layer.lookup("fire|vesta|6").unwrap();
        assert_eq!(record.score.value(), 10);
        assert_eq!(record.keyword.en, "Sacred focus in daily work, Fire tone");
        assert_eq!(layer.lookup("water|vesta|12").unwrap().score.value(), 2);
        assert!(layer.lookup("water|vesta|1").is_none());
    }
}
