//! Layer 7: favorable element against sensitive points by sign
//!
//! Sparse: only signs whose element mirrors, feeds, or restrains the
//! favorable element carry a cell.

use super::labels;
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use crate::phase::{Element, PhaseRelation, SIGNS};
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 300;

/// (point, score when mirrored, fed, restrained)
const POINTS: [(&str, [u8; 3]); 5] = [
    ("north_node", [9, 8, 3]),
    ("south_node", [6, 6, 4]),
    ("part_of_fortune", [10, 8, 3]),
    ("vertex", [8, 7, 2]),
    ("lilith", [7, 6, 2]),
];

/// Index into a point's score triple with (ko, en) verbs
fn effect(relation: PhaseRelation) -> Option<(usize, &'static str, &'static str)> {
    match relation {
        PhaseRelation::Same => Some((0, "증폭", "amplified")),
        PhaseRelation::GeneratedBy => Some((1, "양성", "nourished")),
        PhaseRelation::ControlledBy => Some((2, "저해", "obstructed")),
        PhaseRelation::Generates | PhaseRelation::Controls => None,
    }
}

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::FavorablePoint,
        vec![
            Axis::Value {
                field: TraitField::FavorableElement,
                category: TraitCategory::Element,
            },
            Axis::Entries {
                field: TraitField::AuxiliaryPointSigns,
                key: TraitCategory::AuxiliaryPoint,
                value: TraitCategory::Sign,
            },
        ],
        CAPACITY,
    );

    for favorable in Element::ALL {
        let (favorable_ko, favorable_en) = labels(TraitCategory::Element, favorable.token());
        for (point, scores) in POINTS {
            let (point_ko, point_en) = labels(TraitCategory::AuxiliaryPoint, point);
            for (sign, western, _) in SIGNS {
                let Some((slot, verb_ko, verb_en)) =
                    effect(favorable.relation_to(western.counterpart()))
                else {
                    continue;
                };
                let (sign_ko, sign_en) = labels(TraitCategory::Sign, sign);
                layer.cell(
                    &[favorable.token(), point, sign],
                    scores[slot],
                    format!("{sign_ko}의 {point_ko}: {favorable_ko} 용신 {verb_ko}"),
                    format!("{favorable_en} luck {verb_en} by {point_en} in {sign_en}"),
                );
            }
        }
    }
    layer.build()
}
