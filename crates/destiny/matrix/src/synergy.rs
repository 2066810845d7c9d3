//! Cross-layer synergy index
//!
//! Built after the per-layer pass. Matched cells scoring at least
//! [`SYNERGY_SCORE_FLOOR`] are grouped by the canonical trait tokens that
//! formed their keys; a group that spans enough distinct layers is a synergy.

use crate::normalize;
use destiny_types::{LayerId, Locale, MatchedCell, Synergy, TraitToken};
use std::collections::{BTreeMap, BTreeSet};

/// Lowest cell score that contributes to a synergy
pub const SYNERGY_SCORE_FLOOR: u8 = 5;

#[derive(Debug, Clone, Default)]
struct Group {
    layers: BTreeSet<LayerId>,
    combined_score: u32,
    cell_count: usize,
}

/// Matched cells grouped by shared trait token
#[derive(Debug, Clone, Default)]
pub struct SynergyIndex {
    groups: BTreeMap<TraitToken, Group>,
}

impl SynergyIndex {
    pub fn build<'a>(cells: impl IntoIterator<Item = &'a MatchedCell>) -> Self {
        let mut groups: BTreeMap<TraitToken, Group> = BTreeMap::new();
        for cell in cells {
            let score = cell.score().value();
            if score < SYNERGY_SCORE_FLOOR {
                continue;
            }
            let tokens: BTreeSet<&TraitToken> = cell.traits.iter().collect();
            for token in tokens {
                let group = groups.entry(token.clone()).or_default();
                group.layers.insert(cell.layer);
                group.combined_score += u32::from(score);
                group.cell_count += 1;
            }
        }
        Self { groups }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Groups spanning at least `min_layers` layers, best first
    pub fn top(&self, min_layers: usize, limit: usize, locale: Locale) -> Vec<Synergy> {
        let mut qualifying: Vec<(&TraitToken, &Group)> = self
            .groups
            .iter()
            .filter(|(_, group)| group.layers.len() >= min_layers)
            .collect();

        qualifying.sort_by(|(a_token, a), (b_token, b)| {
            b.combined_score
                .cmp(&a.combined_score)
                .then_with(|| b.layers.len().cmp(&a.layers.len()))
                .then_with(|| a_token.category.cmp(&b_token.category))
                .then_with(|| a_token.value.cmp(&b_token.value))
        });

        qualifying
            .into_iter()
            .take(limit)
            .map(|(token, group)| Synergy {
                token: token.clone(),
                label: normalize::label(token.category, &token.value, locale)
                    .map(str::to_string)
                    .unwrap_or_else(|| token.value.clone()),
                layers: group.layers.iter().copied().collect(),
                combined_score: group.combined_score,
                cell_count: group.cell_count,
            })
            .collect()
    }
}
