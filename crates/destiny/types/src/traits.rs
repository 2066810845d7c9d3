//! Trait input supplied by the chronology and horoscope calculators
//!
//! Every field is optional on the wire. Only [`TraitField::DominantElement`]
//! is required by the engine; all other absences simply reduce the number of
//! cells that can match.

use crate::locale::Locale;
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field of [`TraitInput`] that a layer axis can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitField {
    // Chronology
    DominantElement,
    PillarElements,
    RoleDistribution,
    StageDistribution,
    Relations,
    PrimaryPattern,
    FavorableElement,
    DecadeElement,
    YearElement,
    Markers,

    // Horoscope
    WesternElement,
    PlanetHouses,
    PlanetSigns,
    Aspects,
    Transits,
    MinorBodyHouses,
    AuxiliaryPointSigns,
}

impl TraitField {
    pub const ALL: [TraitField; 17] = [
        TraitField::DominantElement,
        TraitField::PillarElements,
        TraitField::RoleDistribution,
        TraitField::StageDistribution,
        TraitField::Relations,
        TraitField::PrimaryPattern,
        TraitField::FavorableElement,
        TraitField::DecadeElement,
        TraitField::YearElement,
        TraitField::Markers,
        TraitField::WesternElement,
        TraitField::PlanetHouses,
        TraitField::PlanetSigns,
        TraitField::Aspects,
        TraitField::Transits,
        TraitField::MinorBodyHouses,
        TraitField::AuxiliaryPointSigns,
    ];

    /// Wire name of the field
    pub fn as_str(self) -> &'static str {
        match self {
            TraitField::DominantElement => "dominantElement",
            TraitField::PillarElements => "pillarElements",
            TraitField::RoleDistribution => "roleDistribution",
            TraitField::StageDistribution => "stageDistribution",
            TraitField::Relations => "relations",
            TraitField::PrimaryPattern => "primaryPattern",
            TraitField::FavorableElement => "favorableElement",
            TraitField::DecadeElement => "decadeElement",
            TraitField::YearElement => "yearElement",
            TraitField::Markers => "markers",
            TraitField::WesternElement => "westernElement",
            TraitField::PlanetHouses => "planetHouses",
            TraitField::PlanetSigns => "planetSigns",
            TraitField::Aspects => "aspects",
            TraitField::Transits => "transits",
            TraitField::MinorBodyHouses => "minorBodyHouses",
            TraitField::AuxiliaryPointSigns => "auxiliaryPointSigns",
        }
    }

    /// Whether the engine rejects input without this field
    pub fn is_required(self) -> bool {
        matches!(self, TraitField::DominantElement)
    }
}

impl fmt::Display for TraitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocabulary a trait value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Element,
    WesternElement,
    Role,
    Stage,
    Relation,
    Pattern,
    Marker,
    Planet,
    Sign,
    House,
    Aspect,
    Transit,
    MinorBody,
    AuxiliaryPoint,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; 14] = [
        TraitCategory::Element,
        TraitCategory::WesternElement,
        TraitCategory::Role,
        TraitCategory::Stage,
        TraitCategory::Relation,
        TraitCategory::Pattern,
        TraitCategory::Marker,
        TraitCategory::Planet,
        TraitCategory::Sign,
        TraitCategory::House,
        TraitCategory::Aspect,
        TraitCategory::Transit,
        TraitCategory::MinorBody,
        TraitCategory::AuxiliaryPoint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TraitCategory::Element => "element",
            TraitCategory::WesternElement => "western_element",
            TraitCategory::Role => "role",
            TraitCategory::Stage => "stage",
            TraitCategory::Relation => "relation",
            TraitCategory::Pattern => "pattern",
            TraitCategory::Marker => "marker",
            TraitCategory::Planet => "planet",
            TraitCategory::Sign => "sign",
            TraitCategory::House => "house",
            TraitCategory::Aspect => "aspect",
            TraitCategory::Transit => "transit",
            TraitCategory::MinorBody => "minor_body",
            TraitCategory::AuxiliaryPoint => "auxiliary_point",
        }
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => match self {
                TraitCategory::Element => "오행",
                TraitCategory::WesternElement => "서양 원소",
                TraitCategory::Role => "십신",
                TraitCategory::Stage => "십이운성",
                TraitCategory::Relation => "합충",
                TraitCategory::Pattern => "격국",
                TraitCategory::Marker => "신살",
                TraitCategory::Planet => "행성",
                TraitCategory::Sign => "별자리",
                TraitCategory::House => "하우스",
                TraitCategory::Aspect => "애스펙트",
                TraitCategory::Transit => "트랜짓",
                TraitCategory::MinorBody => "소행성",
                TraitCategory::AuxiliaryPoint => "감응점",
            },
            Locale::En => match self {
                TraitCategory::Element => "Element",
                TraitCategory::WesternElement => "Western element",
                TraitCategory::Role => "Relational role",
                TraitCategory::Stage => "Growth stage",
                TraitCategory::Relation => "Structural relation",
                TraitCategory::Pattern => "Pattern",
                TraitCategory::Marker => "Auxiliary marker",
                TraitCategory::Planet => "Planet",
                TraitCategory::Sign => "Sign",
                TraitCategory::House => "House",
                TraitCategory::Aspect => "Aspect",
                TraitCategory::Transit => "Transit",
                TraitCategory::MinorBody => "Minor body",
                TraitCategory::AuxiliaryPoint => "Sensitive point",
            },
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aspect between two horoscope bodies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectInput {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub to: String,

    /// Aspect type, e.g. `trine`
    #[serde(alias = "type")]
    pub kind: String,
}

impl AspectInput {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: kind.into(),
        }
    }
}

/// Flat record of traits produced by the upstream calculators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraitInput {
    /// Dominant / day-master element (required)
    pub dominant_element: Option<String>,

    /// Element of each pillar
    pub pillar_elements: Vec<String>,

    /// Relational role -> weight
    pub role_distribution: BTreeMap<String, f64>,

    /// Growth stage -> weight
    pub stage_distribution: BTreeMap<String, f64>,

    /// Active structural relations
    pub relations: Vec<String>,

    /// Primary pattern classification
    pub primary_pattern: Option<String>,

    /// Favorable element classification
    pub favorable_element: Option<String>,

    /// Element of the current decade cycle
    pub decade_element: Option<String>,

    /// Element of the current year cycle
    pub year_element: Option<String>,

    /// Auxiliary markers
    pub markers: Vec<String>,

    /// Dominant tropical element
    pub western_element: Option<String>,

    /// Planet -> house, as a number or a label such as `7th`
    #[serde(deserialize_with = "house_labels")]
    pub planet_houses: BTreeMap<String, String>,

    /// Planet -> sign
    pub planet_signs: BTreeMap<String, String>,

    pub aspects: Vec<AspectInput>,

    /// Active transits
    pub transits: Vec<String>,

    /// Minor body -> house, as a number or a label
    #[serde(deserialize_with = "house_labels")]
    pub minor_body_houses: BTreeMap<String, String>,

    /// Sensitive point -> sign
    pub auxiliary_point_signs: BTreeMap<String, String>,
}

/// Raw values of a single field, shaped for axis resolution
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValues<'a> {
    /// Field missing, blank or empty
    Absent,

    /// Single categorical label
    Scalar(&'a str),

    /// List of labels
    List(Vec<&'a str>),

    /// Key/value entries of a mapping
    Mapping(Vec<(&'a str, String)>),
}

impl FieldValues<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValues::Absent)
    }
}

impl TraitInput {
    /// Create input carrying only the required field
    pub fn new(dominant_element: impl Into<String>) -> Self {
        Self {
            dominant_element: Some(dominant_element.into()),
            ..Default::default()
        }
    }

    /// Raw values of a field; blank scalars and empty collections are absent
    pub fn values(&self, field: TraitField) -> FieldValues<'_> {
        match field {
            TraitField::DominantElement => scalar(&self.dominant_element),
            TraitField::PillarElements => list(&self.pillar_elements),
            TraitField::RoleDistribution => distribution(&self.role_distribution),
            TraitField::StageDistribution => distribution(&self.stage_distribution),
            TraitField::Relations => list(&self.relations),
            TraitField::PrimaryPattern => scalar(&self.primary_pattern),
            TraitField::FavorableElement => scalar(&self.favorable_element),
            TraitField::DecadeElement => scalar(&self.decade_element),
            TraitField::YearElement => scalar(&self.year_element),
            TraitField::Markers => list(&self.markers),
            TraitField::WesternElement => scalar(&self.western_element),
            TraitField::PlanetHouses => labelled(&self.planet_houses),
            TraitField::PlanetSigns => labelled(&self.planet_signs),
            TraitField::Aspects => {
                let kinds: Vec<&str> = self
                    .aspects
                    .iter()
                    .map(|aspect| aspect.kind.trim())
                    .filter(|kind| !kind.is_empty())
                    .collect();
                non_empty(kinds, FieldValues::List)
            }
            TraitField::Transits => list(&self.transits),
            TraitField::MinorBodyHouses => labelled(&self.minor_body_houses),
            TraitField::AuxiliaryPointSigns => labelled(&self.auxiliary_point_signs),
        }
    }

    pub fn is_present(&self, field: TraitField) -> bool {
        !self.values(field).is_absent()
    }

    /// Fields carrying at least one value
    pub fn present_fields(&self) -> Vec<TraitField> {
        TraitField::ALL
            .into_iter()
            .filter(|field| self.is_present(*field))
            .collect()
    }
}

fn scalar(value: &Option<String>) -> FieldValues<'_> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => FieldValues::Scalar(v),
        _ => FieldValues::Absent,
    }
}

fn list(values: &[String]) -> FieldValues<'_> {
    let items: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    non_empty(items, FieldValues::List)
}

fn distribution(weights: &BTreeMap<String, f64>) -> FieldValues<'_> {
    let entries: Vec<(&str, String)> = weights
        .iter()
        .filter(|(_, weight)| **weight > 0.0)
        .map(|(key, weight)| (key.as_str(), weight.to_string()))
        .collect();
    non_empty(entries, FieldValues::Mapping)
}

/// House value as sent by a calculator
///
/// Any JSON value is accepted; values that are not a house fail to match
/// during resolution.
#[derive(Deserialize)]
#[serde(untagged)]
enum HouseValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl HouseValue {
    fn into_label(self) -> String {
        match self {
            HouseValue::Integer(n) => n.to_string(),
            HouseValue::Float(n) if n.is_finite() && n.fract() == 0.0 => format!("{n:.0}"),
            HouseValue::Float(n) => n.to_string(),
            HouseValue::Text(text) => text,
            HouseValue::Other(IgnoredAny) => String::new(),
        }
    }
}

fn house_labels<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, HouseValue>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.into_label()))
        .collect())
}

fn labelled(map: &BTreeMap<String, String>) -> FieldValues<'_> {
    let entries: Vec<(&str, String)> = map
        .iter()
        .filter(|(_, label)| !label.trim().is_empty())
        .map(|(key, label)| (key.as_str(), label.trim().to_string()))
        .collect();
    non_empty(entries, FieldValues::Mapping)
}

fn non_empty<'a, T>(items: Vec<T>, wrap: fn(Vec<T>) -> FieldValues<'a>) -> FieldValues<'a> {
    if items.is_empty() {
        FieldValues::Absent
    } else {
        wrap(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "dominantElement": "wood",
            "pillarElements": ["wood", "fire"],
            "planetHouses": {"venus": 7},
            "aspects": [{"from": "sun", "to": "moon", "type": "trine"}]
        }"#;
        let input: TraitInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.dominant_element.as_deref(), Some("wood"));
        assert_eq!(input.pillar_elements.len(), 2);
        assert_eq!(input.planet_houses.get("venus").map(String::as_str), Some("7"));
        assert_eq!(input.aspects[0].kind, "trine");
        assert!(input.transits.is_empty());
    }

    #[test]
    fn test_blank_scalar_is_absent() {
        let mut input = TraitInput::new("   ");
        assert!(input.values(TraitField::DominantElement).is_absent());

        input.dominant_element = Some(" fire ".into());
        assert_eq!(
            input.values(TraitField::DominantElement),
            FieldValues::Scalar("fire")
        );
    }

    #[test]
    fn test_distribution_drops_zero_weights() {
        let mut input = TraitInput::new("wood");
        input.role_distribution.insert("companion".into(), 2.0);
        input.role_distribution.insert("direct_wealth".into(), 0.0);

        match input.values(TraitField::RoleDistribution) {
            FieldValues::Mapping(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].0, "companion");
            }
            other => panic!("unexpected values: {other:?}"),
        }

        input.role_distribution.clear();
        input.role_distribution.insert("companion".into(), 0.0);
        assert!(input.values(TraitField::RoleDistribution).is_absent());
    }

    #[test]
    fn test_present_fields() {
        let mut input = TraitInput::new("wood");
        input.western_element = Some("fire".into());
        input.planet_houses.insert("sun".into(), "10".into());

        assert_eq!(
            input.present_fields(),
            vec![
                TraitField::DominantElement,
                TraitField::WesternElement,
                TraitField::PlanetHouses
            ]
        );
        assert!(TraitField::DominantElement.is_required());
        assert!(!TraitField::PlanetHouses.is_required());
    }

    #[test]
    fn test_house_values_accept_numbers_and_labels() {
        let json = r#"{
            "dominantElement": "wood",
            "planetHouses": {"sun": "7th", "moon": 4, "mars": 300, "venus": 10.0, "pluto": null},
            "minorBodyHouses": {"ceres": -1, "vesta": "7하우스", "juno": true}
        }"#;
        let input: TraitInput = serde_json::from_str(json).unwrap();
        let houses = |map: &BTreeMap<String, String>, key: &str| map[key].clone();

        assert_eq!(houses(&input.planet_houses, "sun"), "7th");
        assert_eq!(houses(&input.planet_houses, "moon"), "4");
        assert_eq!(houses(&input.planet_houses, "mars"), "300");
        assert_eq!(houses(&input.planet_houses, "venus"), "10");
        assert_eq!(houses(&input.planet_houses, "pluto"), "");
        assert_eq!(houses(&input.minor_body_houses, "ceres"), "-1");
        assert_eq!(houses(&input.minor_body_houses, "vesta"), "7하우스");

        match input.values(TraitField::MinorBodyHouses) {
            FieldValues::Mapping(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected values: {other:?}"),
        }
    }

    #[test]
    fn test_null_house_map_is_absent() {
        let input: TraitInput =
            serde_json::from_str(r#"{"dominantElement": "wood", "planetHouses": null}"#).unwrap();
        assert!(!input.is_present(TraitField::PlanetHouses));
    }
}
