//! Key resolver
//!
//! Turns trait input into the candidate keys of a layer and looks them up.
//! Each axis yields a set of normalized candidates; the layer's candidate
//! keys are the Cartesian product of its axes. An axis with no candidates
//! (field absent, or no value normalizes) leaves the layer empty.

use crate::catalog::{compose_key, Axis, LayerDefinition};
use crate::normalize::normalize;
use destiny_types::{FieldValues, MatchedCell, TraitInput, TraitToken};
use std::collections::{BTreeMap, BTreeSet};

/// Normalized token tuples contributed by one axis, deduplicated and sorted
pub fn axis_candidates(axis: &Axis, input: &TraitInput) -> Vec<Vec<&'static str>> {
    let values = input.values(axis.field());
    let mut candidates = BTreeSet::new();

    match *axis {
        Axis::Value { category, .. } | Axis::Keys { category, .. } => {
            for raw in labels(&values) {
                if let Some(token) = normalize(category, raw) {
                    candidates.insert(vec![token]);
                }
            }
        }
        Axis::Values { category, .. } => {
            for raw in mapping_values(&values) {
                if let Some(token) = normalize(category, raw) {
                    candidates.insert(vec![token]);
                }
            }
        }
        Axis::Entries { key, value, .. } => {
            if let FieldValues::Mapping(entries) = &values {
                for (raw_key, raw_value) in entries {
                    if let (Some(k), Some(v)) = (normalize(key, raw_key), normalize(value, raw_value)) {
                        candidates.insert(vec![k, v]);
                    }
                }
            }
        }
    }

    candidates.into_iter().collect()
}

/// Scalar value, list items, or mapping keys
fn labels<'a>(values: &'a FieldValues<'a>) -> Vec<&'a str> {
    match values {
        FieldValues::Absent => Vec::new(),
        FieldValues::Scalar(value) => vec![*value],
        FieldValues::List(items) => items.clone(),
        FieldValues::Mapping(entries) => entries.iter().map(|(key, _)| *key).collect(),
    }
}

/// Mapping values; plain labels stand in for values elsewhere
fn mapping_values<'a>(values: &'a FieldValues<'a>) -> Vec<&'a str> {
    match values {
        FieldValues::Mapping(entries) => entries.iter().map(|(_, value)| value.as_str()).collect(),
        other => labels(other),
    }
}

/// Every candidate key of a layer as token tuples in axis order
pub fn candidate_keys(layer: &LayerDefinition, input: &TraitInput) -> Vec<Vec<&'static str>> {
    let mut keys: Vec<Vec<&'static str>> = vec![Vec::new()];
    for axis in layer.axes() {
        let candidates = axis_candidates(axis, input);
        if candidates.is_empty() {
            return Vec::new();
        }
        keys = keys
            .iter()
            .flat_map(|prefix| {
                candidates.iter().map(move |candidate| {
                    let mut key = prefix.clone();
                    key.extend(candidate);
                    key
                })
            })
            .collect();
    }
    keys
}

/// Cells of one layer realized by the input, keyed by composite key
pub fn resolve_layer(layer: &LayerDefinition, input: &TraitInput) -> BTreeMap<String, MatchedCell> {
    let categories = layer.key_categories();
    candidate_keys(layer, input)
        .into_iter()
        .filter_map(|tokens| {
            let key = compose_key(&tokens);
            let record = layer.lookup(&key)?.clone();
            let traits = categories
                .iter()
                .zip(&tokens)
                .map(|(category, token)| TraitToken::new(*category, *token))
                .collect();
            Some((
                key.clone(),
                MatchedCell {
                    layer: layer.id(),
                    key,
                    record,
                    traits,
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use destiny_types::{AspectInput, LayerId, TraitCategory, TraitField};

    fn layer(id: LayerId) -> &'static LayerDefinition {
        Catalog::standard().unwrap().layer(id).unwrap()
    }

    #[test]
    fn test_scalar_axes() {
        let mut input = TraitInput::new("목");
        input.western_element = Some("Air".into());

        let cells = resolve_layer(layer(LayerId::ElementCore), &input);
        assert_eq!(cells.len(), 1);
        let cell = &cells["wood|air"];
        assert_eq!(cell.score().value(), 9);
        assert_eq!(
            cell.traits,
            vec![
                TraitToken::new(TraitCategory::Element, "wood"),
                TraitToken::new(TraitCategory::WesternElement, "air"),
            ]
        );
    }

    #[test]
    fn test_missing_axis_leaves_layer_empty() {
        let input = TraitInput::new("wood");
        assert!(resolve_layer(layer(LayerId::ElementCore), &input).is_empty());
        assert!(candidate_keys(layer(LayerId::CycleTransit), &input).is_empty());
    }

    #[test]
    fn test_cartesian_product_and_dedup() {
        let mut input = TraitInput::new("wood");
        input.pillar_elements = vec!["wood".into(), "木".into(), "fire".into()];
        input.planet_signs.insert("sun".into(), "Leo".into());
        input.planet_signs.insert("moon".into(), "사자자리".into());
        input.planet_signs.insert("venus".into(), "Pisces".into());

        let keys = candidate_keys(layer(LayerId::PillarSign), &input);
        // {fire, wood} x {leo, pisces}
        assert_eq!(keys.len(), 4);
        let cells = resolve_layer(layer(LayerId::PillarSign), &input);
        assert!(cells.contains_key("wood|leo"));
        assert!(cells.contains_key("fire|pisces"));
    }

    #[test]
    fn test_unrecognized_values_are_dropped() {
        let mut input = TraitInput::new("wood");
        input.relations = vec!["clash".into(), "mystery".into()];
        input.aspects = vec![
            AspectInput::new("sun", "moon", "opposition"),
            AspectInput::new("sun", "mars", "semi-square"),
        ];
        let cells = resolve_layer(layer(LayerId::RelationAspect), &input);
        assert_eq!(cells.keys().collect::<Vec<_>>(), vec!["clash|opposition"]);
    }

    #[test]
    fn test_distribution_keys_and_house_values() {
        let mut input = TraitInput::new("wood");
        input.stage_distribution.insert("제왕".into(), 1.0);
        input.stage_distribution.insert("death".into(), 0.0);
        input.planet_houses.insert("sun".into(), "10".into());
        input.planet_houses.insert("moon".into(), "10".into());

        let stage = layer(LayerId::StageHouse);
        let axis = &stage.axes()[1];
        assert_eq!(axis.field(), TraitField::PlanetHouses);
        assert_eq!(axis_candidates(axis, &input), vec![vec!["10"]]);

        let cells = resolve_layer(stage, &input);
        assert_eq!(cells.keys().collect::<Vec<_>>(), vec!["peak|10"]);
    }

    #[test]
    fn test_entry_axes_need_both_tokens() {
        let mut input = TraitInput::new("fire");
        input.minor_body_houses.insert("Vesta".into(), "6".into());
        input.minor_body_houses.insert("Ceres".into(), "13".into());
        input.minor_body_houses.insert("Eris".into(), "6".into());

        let cells = resolve_layer(layer(LayerId::ElementBody), &input);
        assert_eq!(cells.keys().collect::<Vec<_>>(), vec!["fire|vesta|6"]);
        assert_eq!(cells["fire|vesta|6"].traits.len(), 3);
    }

    #[test]
    fn test_house_labels_resolve_like_numbers() {
        for house in ["7", "7th", "7하우스", "house 7"] {
            let mut input = TraitInput::new("wood");
            input.stage_distribution.insert("peak".into(), 1.0);
            input.planet_houses.insert("sun".into(), house.into());

            let cells = resolve_layer(layer(LayerId::StageHouse), &input);
            assert_eq!(cells.keys().collect::<Vec<_>>(), vec!["peak|7"], "{house}");
        }
    }

    #[test]
    fn test_out_of_range_houses_match_nothing() {
        for house in ["300", "-1", "0", ""] {
            let mut input = TraitInput::new("wood");
            input.stage_distribution.insert("peak".into(), 1.0);
            input.planet_houses.insert("sun".into(), house.into());
            assert!(resolve_layer(layer(LayerId::StageHouse), &input).is_empty(), "{house}");
        }
    }
}
