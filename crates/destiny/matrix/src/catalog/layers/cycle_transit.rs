//! Layer 9: decade and year cycles against active transits
//!
//! A transit's base weight shifts with how the year element treats the
//! decade element.

use super::{labels, tokens};
use crate::catalog::{Axis, LayerBuilder, LayerDefinition};
use crate::error::Result;
use crate::phase::{Element, PhaseRelation};
use destiny_types::{LayerId, TraitCategory, TraitField};

const CAPACITY: usize = 250;

/// Base weight per transit in vocabulary order
const TRANSIT_BASES: [i32; 10] = [8, 4, 3, 3, 5, 4, 4, 3, 5, 7];

/// (shift, ko phrase, en phrase) for the decade's stance toward the year
fn harmony(relation: PhaseRelation) -> (i32, &'static str, &'static str) {
    match relation {
        PhaseRelation::Same => (1, "안정", "steady"),
        PhaseRelation::GeneratedBy => (1, "지원", "supported"),
        PhaseRelation::Generates => (0, "소모", "draining"),
        PhaseRelation::Controls => (-1, "긴장", "strained"),
        PhaseRelation::ControlledBy => (-2, "압박", "pressured"),
    }
}

pub(in crate::catalog) fn definition() -> Result<LayerDefinition> {
    let mut layer = LayerBuilder::new(
        LayerId::CycleTransit,
        vec![
            Axis::Value {
                field: TraitField::DecadeElement,
                category: TraitCategory::Element,
            },
            Axis::Value {
                field: TraitField::YearElement,
                category: TraitCategory::Element,
            },
            Axis::Value {
                field: TraitField::Transits,
                category: TraitCategory::Transit,
            },
        ],
        CAPACITY,
    );

    for decade in Element::ALL {
        let (decade_ko, decade_en) = labels(TraitCategory::Element, decade.token());
        for year in Element::ALL {
            let (year_ko, year_en) = labels(TraitCategory::Element, year.token());
            let (shift, phrase_ko, phrase_en) = harmony(decade.relation_to(year));
            for (transit, base) in tokens(TraitCategory::Transit).zip(TRANSIT_BASES) {
                let (transit_ko, transit_en) = labels(TraitCategory::Transit, transit);
                layer.cell(
                    &[decade.token(), year.token(), transit],
                    super::clamp_score(base + shift),
                    format!("{decade_ko}/{year_ko} 운의 {transit_ko} · {phrase_ko}"),
                    format!("{transit_en} in a {phrase_en} {decade_en}/{year_en} cycle"),
                );
            }
        }
    }
    layer.build()
}
