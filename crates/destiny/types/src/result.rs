//! Internal calculation result
//!
//! These types hold the full per-layer detail of a computation. They are
//! intentionally not serializable; use [`crate::SummaryView`] at boundaries.

use crate::layer::LayerId;
use crate::locale::Locale;
use crate::record::{InteractionRecord, Polarity, Score};
use crate::traits::TraitCategory;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical trait value tagged with its vocabulary
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraitToken {
    pub category: TraitCategory,
    pub value: String,
}

impl TraitToken {
    pub fn new(category: TraitCategory, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

impl fmt::Display for TraitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.value)
    }
}

/// Catalog cell realized by the caller's traits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedCell {
    pub layer: LayerId,

    /// Composite catalog key
    pub key: String,

    pub record: InteractionRecord,

    /// Tokens that formed the key, in axis order
    pub traits: Vec<TraitToken>,
}

impl MatchedCell {
    pub fn score(&self) -> Score {
        self.record.score
    }

    pub fn polarity(&self) -> Polarity {
        self.record.polarity()
    }
}

/// Ranked cell with its keyword resolved to the request locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub layer: LayerId,
    pub key: String,
    pub keyword: String,
    pub score: Score,
}

impl Highlight {
    pub fn polarity(&self) -> Polarity {
        self.score.polarity()
    }
}

/// Trait value shared by matched cells in several layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synergy {
    pub token: TraitToken,

    /// Localized label of the shared value
    pub label: String,

    /// Distinct layers contributing, ascending
    pub layers: Vec<LayerId>,

    pub combined_score: u32,
    pub cell_count: usize,
}

/// Aggregates and highlights of a computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixSummary {
    pub total_score: u32,
    pub strength_points: Vec<Highlight>,
    pub caution_points: Vec<Highlight>,
    pub top_synergies: Vec<Synergy>,
}

/// Full result of one computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    locale: Locale,
    layers: BTreeMap<LayerId, BTreeMap<String, MatchedCell>>,
    summary: MatrixSummary,
}

impl CalculationResult {
    pub fn new(
        locale: Locale,
        layers: BTreeMap<LayerId, BTreeMap<String, MatchedCell>>,
        summary: MatrixSummary,
    ) -> Self {
        Self {
            locale,
            layers,
            summary,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn summary(&self) -> &MatrixSummary {
        &self.summary
    }

    pub fn total_score(&self) -> u32 {
        self.summary.total_score
    }

    /// Matched cells of one layer, keyed by composite key
    pub fn layer(&self, id: LayerId) -> Option<&BTreeMap<String, MatchedCell>> {
        self.layers.get(&id)
    }

    pub fn layers(&self) -> &BTreeMap<LayerId, BTreeMap<String, MatchedCell>> {
        &self.layers
    }

    /// All matched cells in layer then key order
    pub fn cells(&self) -> impl Iterator<Item = &MatchedCell> {
        self.layers.values().flat_map(|cells| cells.values())
    }

    pub fn matched_cells(&self) -> usize {
        self.layers.values().map(BTreeMap::len).sum()
    }

    /// Number of layers with at least one matched cell
    pub fn layers_touched(&self) -> usize {
        self.layers.values().filter(|cells| !cells.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocalizedText;

    fn cell(layer: LayerId, key: &str, score: u8) -> MatchedCell {
        MatchedCell {
            layer,
            key: key.to_string(),
            record: InteractionRecord::new(
                LocalizedText::new("키워드", "keyword"),
                Score::new(score).unwrap(),
            ),
            traits: vec![TraitToken::new(TraitCategory::Element, "wood")],
        }
    }

    #[test]
    fn test_result_counts() {
        let mut layers = BTreeMap::new();
        let mut core = BTreeMap::new();
        core.insert("wood|fire".to_string(), cell(LayerId::ElementCore, "wood|fire", 8));
        layers.insert(LayerId::ElementCore, core);
        layers.insert(LayerId::PillarSign, BTreeMap::new());

        let result = CalculationResult::new(Locale::En, layers, MatrixSummary::default());
        assert_eq!(result.matched_cells(), 1);
        assert_eq!(result.layers_touched(), 1);
        assert_eq!(result.cells().count(), 1);
        assert!(result.layer(LayerId::PillarSign).unwrap().is_empty());
        assert!(result.layer(LayerId::CycleTransit).is_none());
    }

    #[test]
    fn test_token_display() {
        let token = TraitToken::new(TraitCategory::Planet, "venus");
        assert_eq!(token.to_string(), "planet:venus");
    }
}
