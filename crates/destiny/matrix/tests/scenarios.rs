//! End-to-end scenarios over the standard catalog

use destiny_matrix::{MatrixConfig, MatrixEngine, MatrixError};
use destiny_types::{
    AspectInput, LayerId, Locale, SummaryView, TraitCategory, TraitField, TraitInput, TraitToken,
};

fn engine() -> MatrixEngine<'static> {
    MatrixEngine::new(MatrixConfig::default()).unwrap()
}

#[test]
fn element_only_chart_resolves_element_layers() {
    let mut traits = TraitInput::new("wood");
    traits.pillar_elements = vec!["wood".into(), "wood".into(), "fire".into(), "earth".into()];
    traits.western_element = Some("fire".into());

    let result = engine().compute(&traits, Locale::En).unwrap();

    // planet, house and sign layers have nothing to match
    for id in [
        LayerId::PillarSign,
        LayerId::RolePlanet,
        LayerId::StageHouse,
        LayerId::PatternHouse,
        LayerId::MarkerPlanet,
        LayerId::ElementBody,
    ] {
        assert!(result.layer(id).unwrap().is_empty(), "{id}");
    }

    let core = result.layer(LayerId::ElementCore).unwrap();
    assert_eq!(core.len(), 1);
    assert_eq!(core["wood|fire"].record.keyword.en, "Kindled vision");

    assert_eq!(result.layers_touched(), 1);
    assert_eq!(result.total_score(), 8);

    let summary = result.summary();
    assert_eq!(summary.strength_points.len(), 1);
    assert_eq!(summary.strength_points[0].keyword, "Kindled vision");
    assert!(summary.caution_points.is_empty());
    assert!(summary.top_synergies.is_empty());
}

#[test]
fn missing_dominant_element_is_a_validation_error() {
    let mut traits = TraitInput::default();
    traits.western_element = Some("fire".into());
    traits.planet_houses.insert("sun".into(), "10".into());

    let err = engine().compute(&traits, Locale::Ko).unwrap_err();
    assert!(err.is_client_error());
    assert!(matches!(
        err,
        MatrixError::MissingRequiredField {
            field: TraitField::DominantElement
        }
    ));
}

#[test]
fn korean_and_english_labels_match_the_same_cells() {
    let mut english = TraitInput::new("Fire");
    english.stage_distribution.insert("Peak".into(), 1.0);
    english.planet_houses.insert("Sun".into(), "10".into());
    english.markers = vec!["Peach Blossom".into()];
    english.planet_signs.insert("Venus".into(), "Taurus".into());

    let mut korean = TraitInput::new("화");
    korean.stage_distribution.insert("제왕".into(), 1.0);
    korean.planet_houses.insert("태양".into(), "10".into());
    korean.markers = vec!["도화살".into()];
    korean.planet_signs.insert("금성".into(), "황소자리".into());

    let engine = engine();
    let en = engine.compute(&english, Locale::En).unwrap();
    let ko = engine.compute(&korean, Locale::En).unwrap();
    assert_eq!(en, ko);
    assert!(en.layer(LayerId::StageHouse).unwrap().contains_key("peak|10"));
    assert!(en.layer(LayerId::MarkerPlanet).unwrap().contains_key("peach_blossom|venus"));
}

#[test]
fn locale_changes_text_not_numbers() {
    let mut traits = TraitInput::new("water");
    traits.western_element = Some("water".into());
    traits.decade_element = Some("water".into());
    traits.year_element = Some("metal".into());
    traits.transits = vec!["node_return".into()];

    let engine = engine();
    let ko = engine.compute(&traits, Locale::Ko).unwrap();
    let en = engine.compute(&traits, Locale::En).unwrap();

    assert_eq!(ko.total_score(), en.total_score());
    assert_eq!(ko.summary().strength_points[0].keyword, "깊은 조류");
    assert_eq!(en.summary().strength_points[0].keyword, "Deep tide");
}

#[test]
fn synergy_spans_layers_sharing_a_trait() {
    let mut traits = TraitInput::new("fire");
    traits.western_element = Some("fire".into());
    traits.minor_body_houses.insert("vesta".into(), "6".into());
    traits.stage_distribution.insert("peak".into(), 1.0);
    traits.planet_houses.insert("mars".into(), "6".into());

    let result = engine().compute(&traits, Locale::En).unwrap();
    let synergies = &result.summary().top_synergies;

    let fire = synergies
        .iter()
        .find(|s| s.token == TraitToken::new(TraitCategory::Element, "fire"))
        .unwrap();
    assert_eq!(fire.layers, vec![LayerId::ElementCore, LayerId::ElementBody]);
    assert_eq!(fire.label, "Fire");

    let house = synergies
        .iter()
        .find(|s| s.token == TraitToken::new(TraitCategory::House, "6"))
        .unwrap();
    assert_eq!(house.layers, vec![LayerId::StageHouse, LayerId::ElementBody]);
}

#[test]
fn caution_points_list_most_severe_first() {
    let mut traits = TraitInput::new("metal");
    traits.western_element = Some("fire".into());
    traits.relations = vec!["clash".into(), "punishment".into()];
    traits.aspects = vec![
        AspectInput::new("sun", "moon", "opposition"),
        AspectInput::new("mars", "saturn", "square"),
    ];

    let result = engine().compute(&traits, Locale::En).unwrap();
    let scores: Vec<u8> = result
        .summary()
        .caution_points
        .iter()
        .map(|h| h.score.value())
        .collect();
    assert_eq!(scores, vec![1, 2, 2]);
    assert_eq!(result.summary().caution_points[0].key, "clash|opposition");
}

#[test]
fn public_view_hides_layer_detail() {
    let mut traits = TraitInput::new("earth");
    traits.western_element = Some("earth".into());
    let result = engine().compute(&traits, Locale::Ko).unwrap();

    let json = serde_json::to_value(SummaryView::project(&result)).unwrap();
    assert_eq!(json["totalScore"], 9);
    assert_eq!(json["layersTouched"], 1);
    assert_eq!(json["strengthPoints"][0]["keyword"], "반석 같은 인내");
    assert!(json.get("layers").is_none());
    assert!(json["strengthPoints"][0].get("key").is_none());
}
