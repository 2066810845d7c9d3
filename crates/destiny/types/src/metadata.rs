//! Static catalog metadata
//!
//! Describes the catalog's shape (layers, axes, sizes, polarity bands) without
//! exposing any cell content.

use crate::layer::LayerId;
use crate::locale::Locale;
use crate::record::Polarity;
use crate::traits::TraitField;
use serde::{Deserialize, Serialize};

/// Score range of one polarity band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarityBand {
    pub polarity: Polarity,
    pub label: String,
    pub min_score: u8,
    pub max_score: u8,
}

impl PolarityBand {
    pub fn new(polarity: Polarity, locale: Locale) -> Self {
        let (min_score, max_score) = polarity.score_range();
        Self {
            polarity,
            label: polarity.label(locale).to_string(),
            min_score,
            max_score,
        }
    }

    /// All five bands, most favorable first
    pub fn all(locale: Locale) -> Vec<Self> {
        Polarity::ALL
            .into_iter()
            .map(|polarity| Self::new(polarity, locale))
            .collect()
    }
}

/// Shape of one layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerMetadata {
    pub id: LayerId,
    pub number: u8,
    pub name: String,

    /// Input fields read by the layer's axes
    pub axes: Vec<TraitField>,

    pub cell_count: usize,
}

/// Shape of the whole catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub locale: Locale,
    pub layers: Vec<LayerMetadata>,
    pub total_cells: usize,
    pub polarity_bands: Vec<PolarityBand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_in_order() {
        let bands = PolarityBand::all(Locale::En);
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0].polarity, Polarity::Extreme);
        assert_eq!((bands[0].min_score, bands[0].max_score), (9, 10));
        assert_eq!((bands[4].min_score, bands[4].max_score), (1, 2));
        assert_eq!(bands[3].label, "Clash");
    }
}
