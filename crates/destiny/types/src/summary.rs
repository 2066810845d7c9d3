//! Public projection of a calculation result
//!
//! This is the only result shape that crosses a service boundary. It carries
//! aggregates and at most [`PUBLIC_HIGHLIGHT_LIMIT`] entries per list.

use crate::layer::LayerId;
use crate::locale::Locale;
use crate::result::{CalculationResult, Highlight, Synergy};
use crate::traits::TraitCategory;
use serde::{Deserialize, Serialize};

/// Maximum entries per highlight list at the public boundary
pub const PUBLIC_HIGHLIGHT_LIMIT: usize = 3;

/// Highlight as exposed publicly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightView {
    pub layer: LayerId,
    pub keyword: String,
    pub score: u8,
}

impl From<&Highlight> for HighlightView {
    fn from(highlight: &Highlight) -> Self {
        Self {
            layer: highlight.layer,
            keyword: highlight.keyword.clone(),
            score: highlight.score.value(),
        }
    }
}

/// Cross-layer synergy as exposed publicly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyView {
    pub category: TraitCategory,
    pub label: String,
    pub layers: Vec<LayerId>,
    pub combined_score: u32,
}

impl From<&Synergy> for SynergyView {
    fn from(synergy: &Synergy) -> Self {
        Self {
            category: synergy.token.category,
            label: synergy.label.clone(),
            layers: synergy.layers.clone(),
            combined_score: synergy.combined_score,
        }
    }
}

/// Summary returned by the compute endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryView {
    pub locale: Locale,
    pub total_score: u32,
    pub layers_touched: usize,
    pub matched_cells: usize,
    pub strength_points: Vec<HighlightView>,
    pub caution_points: Vec<HighlightView>,
    pub top_synergies: Vec<SynergyView>,
}

impl SummaryView {
    /// Project a result, truncating every list to the public limit
    pub fn project(result: &CalculationResult) -> Self {
        let summary = result.summary();
        Self {
            locale: result.locale(),
            total_score: summary.total_score,
            layers_touched: result.layers_touched(),
            matched_cells: result.matched_cells(),
            strength_points: summary
                .strength_points
                .iter()
                .take(PUBLIC_HIGHLIGHT_LIMIT)
                .map(HighlightView::from)
                .collect(),
            caution_points: summary
                .caution_points
                .iter()
                .take(PUBLIC_HIGHLIGHT_LIMIT)
                .map(HighlightView::from)
                .collect(),
            top_synergies: summary
                .top_synergies
                .iter()
                .take(PUBLIC_HIGHLIGHT_LIMIT)
                .map(SynergyView::from)
                .collect(),
        }
    }
}

impl From<&CalculationResult> for SummaryView {
    fn from(result: &CalculationResult) -> Self {
        Self::project(result)
    }
}
