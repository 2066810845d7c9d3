//! Interaction catalog
//!
//! Ten immutable layers, each a sparse table from composite keys (one
//! canonical token per axis, joined with [`KEY_SEPARATOR`]) to an
//! [`InteractionRecord`]. The standard catalog is generated and validated
//! once per process; a validation failure is surfaced on every access.

mod builder;
mod layers;

pub use builder::LayerBuilder;

use crate::error::{MatrixError, Result};
use destiny_types::{
    CatalogMetadata, InteractionRecord, LayerId, LayerMetadata, Locale, PolarityBand,
    TraitCategory, TraitField,
};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Separator between axis tokens in a composite key
pub const KEY_SEPARATOR: char = '|';

/// Join canonical tokens into a composite key
pub fn compose_key<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut key = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(token.as_ref());
    }
    key
}

/// How a layer reads candidate tokens out of one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Each scalar or list value
    Value {
        field: TraitField,
        category: TraitCategory,
    },

    /// Each mapping key with a positive weight
    Keys {
        field: TraitField,
        category: TraitCategory,
    },

    /// Each mapping value
    Values {
        field: TraitField,
        category: TraitCategory,
    },

    /// Each mapping entry as a two-token pair
    Entries {
        field: TraitField,
        key: TraitCategory,
        value: TraitCategory,
    },
}

impl Axis {
    pub fn field(&self) -> TraitField {
        match self {
            Axis::Value { field, .. }
            | Axis::Keys { field, .. }
            | Axis::Values { field, .. }
            | Axis::Entries { field, .. } => *field,
        }
    }

    /// Vocabularies of the tokens this axis contributes, in key order
    pub fn categories(&self) -> Vec<TraitCategory> {
        match self {
            Axis::Value { category, .. }
            | Axis::Keys { category, .. }
            | Axis::Values { category, .. } => vec![*category],
            Axis::Entries { key, value, .. } => vec![*key, *value],
        }
    }
}

/// One validated layer
#[derive(Debug, Clone)]
pub struct LayerDefinition {
    id: LayerId,
    axes: Vec<Axis>,
    capacity: usize,
    cells: HashMap<String, InteractionRecord>,
}

impl LayerDefinition {
    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Declared upper bound on the number of cells
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn lookup(&self, key: &str) -> Option<&InteractionRecord> {
        self.cells.get(key)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &InteractionRecord)> {
        self.cells.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Vocabulary of every token position in a key
    pub fn key_categories(&self) -> Vec<TraitCategory> {
        self.axes.iter().flat_map(Axis::categories).collect()
    }

    pub fn metadata(&self, locale: Locale) -> LayerMetadata {
        LayerMetadata {
            id: self.id,
            number: self.id.number(),
            name: self.id.name(locale).to_string(),
            axes: self.axes.iter().map(Axis::field).collect(),
            cell_count: self.cells.len(),
        }
    }
}

/// All ten layers in layer order
#[derive(Debug, Clone)]
pub struct Catalog {
    layers: Vec<LayerDefinition>,
}

static STANDARD: LazyLock<Result<Catalog>> = LazyLock::new(Catalog::build);

impl Catalog {
    /// Generate and validate the standard catalog
    pub fn build() -> Result<Self> {
        Self::from_layers(vec![
            layers::element_core::definition()?,
            layers::pillar_sign::definition()?,
            layers::role_planet::definition()?,
            layers::stage_house::definition()?,
            layers::relation_aspect::definition()?,
            layers::pattern_house::definition()?,
            layers::favorable_point::definition()?,
            layers::marker_planet::definition()?,
            layers::cycle_transit::definition()?,
            layers::element_body::definition()?,
        ])
    }

    /// Shared standard catalog, built on first access
    pub fn standard() -> Result<&'static Catalog> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Assemble a catalog, requiring every layer exactly once in layer order
    pub fn from_layers(layers: Vec<LayerDefinition>) -> Result<Self> {
        let ids: Vec<LayerId> = layers.iter().map(LayerDefinition::id).collect();
        if ids != LayerId::ALL {
            return Err(MatrixError::CatalogIncomplete(format!(
                "expected {} layers in order, found {:?}",
                LayerId::COUNT,
                ids
            )));
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[LayerDefinition] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&LayerDefinition> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn total_cells(&self) -> usize {
        self.layers.iter().map(LayerDefinition::cell_count).sum()
    }

    /// Shape of the catalog without any cell content
    pub fn metadata(&self, locale: Locale) -> CatalogMetadata {
        CatalogMetadata {
            locale,
            layers: self
                .layers
                .iter()
                .map(|layer| layer.metadata(locale))
                .collect(),
            total_cells: self.total_cells(),
            polarity_bands: PolarityBand::all(locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.layers().len(), LayerId::COUNT);
        for (layer, id) in catalog.layers().iter().zip(LayerId::ALL) {
            assert_eq!(layer.id(), id);
            assert!(layer.cell_count() > 0, "{id} is empty");
            assert!(layer.cell_count() <= layer.capacity(), "{id} over capacity");
        }
    }

    #[test]
    fn test_layer_sizes() {
        let catalog = Catalog::standard().unwrap();
        let size = |id| catalog.layer(id).unwrap().cell_count();
        assert_eq!(size(LayerId::ElementCore), 20);
        assert_eq!(size(LayerId::PillarSign), 60);
        assert_eq!(size(LayerId::RolePlanet), 100);
        assert_eq!(size(LayerId::StageHouse), 144);
        assert_eq!(size(LayerId::RelationAspect), 48);
        assert_eq!(size(LayerId::PatternHouse), 120);
        assert_eq!(size(LayerId::MarkerPlanet), 100);
        assert_eq!(size(LayerId::CycleTransit), 250);
        assert!(size(LayerId::FavorablePoint) < 300);
        assert!(size(LayerId::ElementBody) < 300);
    }

    #[test]
    fn test_every_key_is_canonical() {
        let catalog = Catalog::standard().unwrap();
        for layer in catalog.layers() {
            let categories = layer.key_categories();
            for (key, record) in layer.cells() {
                let tokens: Vec<&str> = key.split(KEY_SEPARATOR).collect();
                assert_eq!(tokens.len(), categories.len(), "{key}");
                for (token, category) in tokens.iter().zip(&categories) {
                    assert!(normalize::is_canonical(*category, token), "{key}");
                }
                assert!(!record.keyword.ko.is_empty());
                assert!(!record.keyword.en.is_empty());
            }
        }
    }

    #[test]
    fn test_every_polarity_band_is_populated() {
        let catalog = Catalog::standard().unwrap();
        for band in PolarityBand::all(Locale::En) {
            let populated = catalog
                .layers()
                .iter()
                .flat_map(LayerDefinition::cells)
                .any(|(_, record)| record.polarity() == band.polarity);
            assert!(populated, "no cell in band {}", band.polarity);
        }
    }

    #[test]
    fn test_metadata_matches_catalog() {
        let catalog = Catalog::standard().unwrap();
        let metadata = catalog.metadata(Locale::Ko);
        assert_eq!(metadata.layers.len(), LayerId::COUNT);
        assert_eq!(metadata.total_cells, catalog.total_cells());
        assert_eq!(metadata.layers[0].number, 1);
        assert_eq!(
            metadata.layers[2].axes,
            vec![TraitField::RoleDistribution, TraitField::PlanetHouses]
        );
        assert_eq!(metadata.polarity_bands.len(), 5);
    }

    #[test]
    fn test_from_layers_requires_complete_set() {
        let catalog = Catalog::standard().unwrap();
        let mut layers = catalog.layers().to_vec();
        layers.pop();
        assert!(matches!(
            Catalog::from_layers(layers),
            Err(MatrixError::CatalogIncomplete(_))
        ));

        let mut layers = catalog.layers().to_vec();
        layers.swap(0, 1);
        assert!(Catalog::from_layers(layers).is_err());
    }

    #[test]
    fn test_compose_key() {
        assert_eq!(compose_key(&["wood", "fire"]), "wood|fire");
        assert_eq!(compose_key(&["metal"]), "metal");
        assert_eq!(compose_key::<&str>(&[]), "");
    }
}
