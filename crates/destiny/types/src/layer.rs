//! Correlation layer identifiers

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten fixed correlation layers.
///
/// Declaration order is the layer order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    /// Dominant element x western element
    ElementCore,
    /// Pillar elements x planet signs
    PillarSign,
    /// Ten relational roles x planets
    RolePlanet,
    /// Twelve growth stages x houses
    StageHouse,
    /// Structural relations x aspects
    RelationAspect,
    /// Primary pattern x houses
    PatternHouse,
    /// Favorable element x sensitive point placements
    FavorablePoint,
    /// Auxiliary markers x planets
    MarkerPlanet,
    /// Decade element x year element x transits
    CycleTransit,
    /// Dominant element x minor body placements
    ElementBody,
}

impl LayerId {
    pub const COUNT: usize = 10;

    pub const ALL: [LayerId; Self::COUNT] = [
        LayerId::ElementCore,
        LayerId::PillarSign,
        LayerId::RolePlanet,
        LayerId::StageHouse,
        LayerId::RelationAspect,
        LayerId::PatternHouse,
        LayerId::FavorablePoint,
        LayerId::MarkerPlanet,
        LayerId::CycleTransit,
        LayerId::ElementBody,
    ];

    /// 1-based layer number
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerId::ElementCore => "element_core",
            LayerId::PillarSign => "pillar_sign",
            LayerId::RolePlanet => "role_planet",
            LayerId::StageHouse => "stage_house",
            LayerId::RelationAspect => "relation_aspect",
            LayerId::PatternHouse => "pattern_house",
            LayerId::FavorablePoint => "favorable_point",
            LayerId::MarkerPlanet => "marker_planet",
            LayerId::CycleTransit => "cycle_transit",
            LayerId::ElementBody => "element_body",
        }
    }

    /// Display name
    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => match self {
                LayerId::ElementCore => "오행 핵심",
                LayerId::PillarSign => "원국 오행 × 별자리",
                LayerId::RolePlanet => "십신 × 행성",
                LayerId::StageHouse => "십이운성 × 하우스",
                LayerId::RelationAspect => "합충형해 × 애스펙트",
                LayerId::PatternHouse => "격국 × 하우스",
                LayerId::FavorablePoint => "용신 × 감응점",
                LayerId::MarkerPlanet => "신살 × 행성",
                LayerId::CycleTransit => "대운·세운 × 트랜짓",
                LayerId::ElementBody => "오행 × 소행성",
            },
            Locale::En => match self {
                LayerId::ElementCore => "Element Core",
                LayerId::PillarSign => "Pillar Elements & Signs",
                LayerId::RolePlanet => "Ten Roles & Planets",
                LayerId::StageHouse => "Growth Stages & Houses",
                LayerId::RelationAspect => "Structural Relations & Aspects",
                LayerId::PatternHouse => "Pattern & Houses",
                LayerId::FavorablePoint => "Favorable Element & Sensitive Points",
                LayerId::MarkerPlanet => "Auxiliary Markers & Planets",
                LayerId::CycleTransit => "Luck Cycles & Transits",
                LayerId::ElementBody => "Element & Minor Bodies",
            },
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_numbers_follow_order() {
        for (index, layer) in LayerId::ALL.iter().enumerate() {
            assert_eq!(layer.number() as usize, index + 1);
        }
        assert!(LayerId::ElementCore < LayerId::ElementBody);
    }

    #[test]
    fn test_layer_serde_names() {
        let json = serde_json::to_string(&LayerId::CycleTransit).unwrap();
        assert_eq!(json, "\"cycle_transit\"");
        let parsed: LayerId = serde_json::from_str("\"role_planet\"").unwrap();
        assert_eq!(parsed, LayerId::RolePlanet);
    }
}
