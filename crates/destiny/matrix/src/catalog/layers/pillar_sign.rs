//! Layer 2: pillar elements against the signs planets occupy
//!
//! Scores follow the five-phase relation between the pillar and the sign's
//! element counterpart. Cardinal signs sharpen favorable cells, mutable
//! signs soften unfavorable ones into outright conflict.

use super::labels;
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use crate::phase::{Element, Modality, PhaseRelation, SIGNS};
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 60;

fn base_score(relation: PhaseRelation) -> i32 {
    match relation {
        PhaseRelation::Same => 8,
        PhaseRelation::GeneratedBy => 7,
        PhaseRelation::Generates => 6,
        PhaseRelation::Controls => 4,
        PhaseRelation::ControlledBy => 3,
    }
}

fn score(relation: PhaseRelation, modality: Modality) -> u8 {
    let base = base_score(relation);
    let adjusted = match modality {
        Modality::Cardinal if base >= 7 => base + 1,
        Modality::Mutable if base <= 4 => base - 1,
        _ => base,
    };
    super::clamp_score(adjusted)
}

/// (ko, en) phrasing of the pillar's stance toward the sign
fn stance(relation: PhaseRelation) -> (&'static str, &'static str) {
    match relation {
        PhaseRelation::Same => ("공명", "echoed in"),
        PhaseRelation::GeneratedBy => ("지원", "fed by"),
        PhaseRelation::Generates => ("소모", "feeding"),
        PhaseRelation::Controls => ("제어", "taming"),
        PhaseRelation::ControlledBy => ("억압", "checked by"),
    }
}

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::PillarSign,
        vec![
            Axis::Value {
                field: TraitField::PillarElements,
                category: TraitCategory::Element,
            },
            Axis::Values {
                field: TraitField::PlanetSigns,
                category: TraitCategory::Sign,
            },
        ],
        CAPACITY,
    );

    for pillar in Element::ALL {
        let (pillar_ko, pillar_en) = labels(TraitCategory::Element, pillar.token());
        for (sign, western, modality) in SIGNS {
            let relation = pillar.relation_to(western.counterpart());
            let (sign_ko, sign_en) = labels(TraitCategory::Sign, sign);
            let (stance_ko, stance_en) = stance(relation);
            layer.cell(
                &[pillar.token(), sign],
                score(relation, modality),
                format!("{pillar_ko} 기둥과 {sign_ko} · {stance_ko}"),
                format!("{pillar_en} pillar {stance_en} {sign_en}"),
            );
        }
    }
    layer.build()
}
