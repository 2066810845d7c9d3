//! Layer 5: structural relations against aspect kinds

use super::tokens;
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 48;

const RELATION_THEMES: [(&str, &str); 8] = [
    ("결속", "Bonded"),
    ("조용한 동맹", "Quiet alliance"),
    ("공동의 추진력", "Shared momentum"),
    ("계절의 통합", "Seasonal unity"),
    ("격변", "Upheaval"),
    ("마찰", "Friction"),
    ("숨은 긴장", "Hidden strain"),
    ("깨진 인연", "Broken ties"),
];

const ASPECT_TONES: [(&str, &str); 6] = [
    ("융합", "fused"),
    ("열림", "opening"),
    ("긴장", "under tension"),
    ("흐름", "in flow"),
    ("양극", "polarized"),
    ("어긋남", "misaligned"),
];

/// Columns: conjunction, sextile, square, trine, opposition, quincunx
const SCORES: [[u8; 6]; 8] = [
    [9, 8, 4, 9, 5, 5],
    [8, 9, 4, 8, 5, 6],
    [9, 8, 5, 10, 4, 5],
    [8, 7, 5, 8, 5, 5],
    [4, 5, 2, 5, 1, 3],
    [3, 5, 2, 4, 2, 3],
    [4, 5, 3, 5, 3, 2],
    [3, 5, 2, 5, 2, 3],
];

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::RelationAspect,
        vec![
            Axis::Value {
                field: TraitField::Relations,
                category: TraitCategory::Relation,
            },
            Axis::Value {
                field: TraitField::Aspects,
                category: TraitCategory::Aspect,
            },
        ],
        CAPACITY,
    );

    for ((relation, (theme_ko, theme_en)), row) in tokens(TraitCategory::Relation)
        .zip(RELATION_THEMES)
        .zip(SCORES)
    {
        for ((aspect, (tone_ko, tone_en)), score) in tokens(TraitCategory::Aspect)
            .zip(ASPECT_TONES)
            .zip(row)
        {
            layer.cell(
                &[relation, aspect],
                score,
                format!("{theme_ko} · {tone_ko}"),
                format!("{theme_en}, {tone_en}"),
            );
        }
    }
    layer.build()
}
