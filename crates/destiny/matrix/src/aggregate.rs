//! Aggregator
//!
//! Folds matched cells into a total score and partitions them by polarity.
//! Strength and caution sets are disjoint because their score ranges are.

use destiny_types::{LayerId, MatchedCell};
use std::collections::BTreeMap;

/// Totals of a computation, borrowing the matched cells
#[derive(Debug, Clone, Default)]
pub struct Aggregate<'a> {
    /// Plain sum of every matched score
    pub total_score: u32,
    pub matched_cells: usize,
    pub layers_touched: usize,

    /// Cells scoring 7 or more
    pub strengths: Vec<&'a MatchedCell>,

    /// Cells scoring 4 or less
    pub cautions: Vec<&'a MatchedCell>,
}

pub fn aggregate(layers: &BTreeMap<LayerId, BTreeMap<String, MatchedCell>>) -> Aggregate<'_> {
    let mut totals = Aggregate::default();
    for cells in layers.values() {
        if !cells.is_empty() {
            totals.layers_touched += 1;
        }
        for cell in cells.values() {
            let score = cell.score();
            totals.total_score += u32::from(score.value());
            totals.matched_cells += 1;
            if score.is_strength() {
                totals.strengths.push(cell);
            } else if score.is_caution() {
                totals.cautions.push(cell);
            }
        }
    }
    totals
}
