//! Layer 8: auxiliary markers against planets placed in signs

use super::{labels, tokens, PLANET_DOMAINS};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 100;

const MARKER_THEMES: [(&str, &str); 10] = [
    ("매력", "Magnetic charm"),
    ("이동수", "Restless motion"),
    ("고독한 예술성", "Solitary artistry"),
    ("귀인의 도움", "Timely help"),
    ("학문의 재능", "Scholarly gift"),
    ("관능적 매력", "Sensual allure"),
    ("날카로운 기세", "Sharp edge"),
    ("거친 기운", "Raw force"),
    ("강한 통솔력", "Commanding will"),
    ("예민한 직감", "Uncanny sensitivity"),
];

/// Rows follow the marker vocabulary, columns the planet vocabulary
const SCORES: [[u8; 10]; 10] = [
    [7, 7, 6, 10, 8, 6, 3, 6, 8, 7],
    [7, 6, 9, 5, 8, 9, 4, 9, 6, 5],
    [6, 7, 8, 7, 3, 8, 7, 6, 10, 8],
    [9, 8, 8, 8, 6, 10, 7, 6, 7, 6],
    [8, 6, 10, 7, 5, 9, 7, 8, 6, 5],
    [6, 7, 5, 9, 8, 6, 3, 7, 7, 8],
    [7, 3, 5, 3, 9, 5, 4, 6, 2, 8],
    [5, 3, 4, 3, 8, 4, 3, 6, 2, 7],
    [8, 3, 6, 3, 9, 6, 7, 7, 2, 8],
    [3, 2, 5, 4, 3, 4, 3, 6, 7, 6],
];

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::MarkerPlanet,
        vec![
            Axis::Value {
                field: TraitField::Markers,
                category: TraitCategory::Marker,
            },
            Axis::Keys {
                field: TraitField::PlanetSigns,
                category: TraitCategory::Planet,
            },
        ],
        CAPACITY,
    );

    for ((marker, (theme_ko, theme_en)), row) in tokens(TraitCategory::Marker)
        .zip(MARKER_THEMES)
        .zip(SCORES)
    {
        for ((planet, (domain_ko, domain_en)), score) in tokens(TraitCategory::Planet)
            .zip(PLANET_DOMAINS)
            .zip(row)
        {
            let (planet_ko, planet_en) = labels(TraitCategory::Planet, planet);
            layer.cell(
                &[marker, planet],
                score,
                format!("{planet_ko}의 {theme_ko} · {domain_ko}"),
                format!("{theme_en} through {planet_en} ({domain_en})"),
            );
        }
    }
    layer.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        let layer = definition().unwrap();
        let record = layer.lookup("peach_blossom|venus").unwrap();
        assert_eq!(record.score.value(), 10);
        assert_eq!(record.keyword.en, "Magnetic charm through Venus (love)");
        assert_eq!(layer.lookup("white_tiger|neptune").unwrap().score.value(), 2);
    }
}
