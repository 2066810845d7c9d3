//! Layer 3: relational roles against the planets present in the chart

use super::{labels, tokens, PLANET_DOMAINS};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 100;

/// Theme of each role in vocabulary order, as (ko, en)
const ROLE_THEMES: [(&str, &str); 10] = [
    ("자립심", "Self-reliance"),
    ("경쟁심", "Rivalry"),
    ("여유로운 창작", "Creative ease"),
    ("거침없는 재능", "Outspoken talent"),
    ("기회의 재물", "Opportunistic gain"),
    ("안정된 재물", "Steady earnings"),
    ("압박과 투지", "Pressure and grit"),
    ("책임과 질서", "Duty and order"),
    ("비범한 통찰", "Unconventional insight"),
    ("보살핌과 후원", "Nurturing support"),
];

/// Rows follow the role vocabulary, columns the planet vocabulary
/// (sun, moon, mercury, venus, mars, jupiter, saturn, uranus, neptune, pluto)
const SCORES: [[u8; 10]; 10] = [
    [8, 5, 6, 4, 8, 7, 5, 6, 3, 6],
    [6, 3, 5, 3, 9, 5, 4, 7, 2, 7],
    [7, 8, 8, 9, 5, 9, 3, 6, 8, 4],
    [7, 4, 9, 7, 7, 6, 2, 9, 6, 5],
    [6, 5, 7, 8, 7, 10, 4, 8, 5, 6],
    [6, 7, 6, 8, 5, 8, 8, 3, 4, 5],
    [7, 3, 5, 2, 10, 5, 8, 7, 3, 9],
    [9, 6, 7, 6, 5, 8, 9, 2, 4, 6],
    [5, 7, 8, 5, 3, 6, 6, 9, 10, 8],
    [7, 9, 7, 7, 3, 9, 6, 4, 7, 5],
];

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::RolePlanet,
        vec![
            Axis::Keys {
                field: TraitField::RoleDistribution,
                category: TraitCategory::Role,
            },
            Axis::Keys {
                field: TraitField::PlanetHouses,
                category: TraitCategory::Planet,
            },
        ],
        CAPACITY,
    );

    for ((role, (theme_ko, theme_en)), row) in tokens(TraitCategory::Role)
        .zip(ROLE_THEMES)
        .zip(SCORES)
    {
        for ((planet, (domain_ko, domain_en)), score) in tokens(TraitCategory::Planet)
            .zip(PLANET_DOMAINS)
            .zip(row)
        {
            let (planet_ko, planet_en) = labels(TraitCategory::Planet, planet);
            layer.cell(
                &[role, planet],
                score,
                format!("{planet_ko}: {domain_ko} 속 {theme_ko}"),
                format!("{planet_en}: {theme_en} in {domain_en}"),
            );
        }
    }
    layer.build()
}
