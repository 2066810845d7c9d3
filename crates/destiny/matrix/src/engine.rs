//! Matrix engine
//!
//! Orchestrates one computation: validate the input, resolve every layer
//! against the shared catalog, aggregate, then rank highlights and
//! synergies. Layers are independent, so the per-layer pass runs on the
//! rayon pool unless [`MatrixConfig::parallel_layers`] is off; both modes
//! produce identical results.

use crate::aggregate::aggregate;
use crate::catalog::Catalog;
use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};
use crate::highlight::{self, RankOrder};
use crate::resolver::resolve_layer;
use crate::synergy::SynergyIndex;
use destiny_types::{
    CalculationResult, CatalogMetadata, LayerId, Locale, MatchedCell, MatrixSummary, TraitField,
    TraitInput,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, instrument};

type LayerMatches = BTreeMap<LayerId, BTreeMap<String, MatchedCell>>;

/// Correlation engine over an immutable catalog
#[derive(Debug, Clone)]
pub struct MatrixEngine<'c> {
    catalog: &'c Catalog,
    config: MatrixConfig,
}

impl MatrixEngine<'static> {
    /// Engine over the standard catalog
    ///
    /// Fails if the configuration is invalid or the catalog did not pass
    /// validation.
    pub fn new(config: MatrixConfig) -> Result<Self> {
        Self::with_catalog(Catalog::standard()?, config)
    }
}

impl<'c> MatrixEngine<'c> {
    pub fn with_catalog(catalog: &'c Catalog, config: MatrixConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    /// Reject input the engine cannot work with
    pub fn validate(input: &TraitInput) -> Result<()> {
        for field in TraitField::ALL {
            if field.is_required() && !input.is_present(field) {
                return Err(MatrixError::MissingRequiredField { field });
            }
        }
        Ok(())
    }

    /// Correlate the input against every layer
    #[instrument(level = "debug", skip_all, fields(locale = %locale))]
    pub fn compute(&self, input: &TraitInput, locale: Locale) -> Result<CalculationResult> {
        Self::validate(input)?;
        let started = Instant::now();

        let layers = self.resolve_layers(input);
        let summary = self.summarize(&layers, locale);

        let result = CalculationResult::new(locale, layers, summary);
        debug!(
            present_fields = input.present_fields().len(),
            layers_touched = result.layers_touched(),
            matched_cells = result.matched_cells(),
            total_score = result.total_score(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "matrix computed"
        );
        Ok(result)
    }

    /// Catalog shape for `locale`
    pub fn metadata(&self, locale: Locale) -> CatalogMetadata {
        self.catalog.metadata(locale)
    }

    fn resolve_layers(&self, input: &TraitInput) -> LayerMatches {
        let layers = self.catalog.layers();
        if self.config.parallel_layers {
            layers
                .par_iter()
                .map(|layer| (layer.id(), resolve_layer(layer, input)))
                .collect()
        } else {
            layers
                .iter()
                .map(|layer| (layer.id(), resolve_layer(layer, input)))
                .collect()
        }
    }

    fn summarize(&self, layers: &LayerMatches, locale: Locale) -> MatrixSummary {
        let limit = self.config.highlight_limit;
        let totals = aggregate(layers);
        let synergies = SynergyIndex::build(layers.values().flat_map(BTreeMap::values));
        debug!(groups = synergies.group_count(), "synergy index built");

        MatrixSummary {
            total_score: totals.total_score,
            strength_points: highlight::select(
                totals.strengths.iter().copied(),
                RankOrder::Strongest,
                limit,
                locale,
            ),
            caution_points: highlight::select(
                totals.cautions.iter().copied(),
                RankOrder::MostSevere,
                limit,
                locale,
            ),
            top_synergies: synergies.top(self.config.synergy_min_layers, limit, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destiny_types::{AspectInput, Polarity};

    fn engine() -> MatrixEngine<'static> {
        MatrixEngine::new(MatrixConfig::default()).unwrap()
    }

    fn rich_input() -> TraitInput {
        let mut input = TraitInput::new("wood");
        input.pillar_elements = vec!["wood".into(), "water".into()];
        input.role_distribution.insert("eating_god".into(), 2.0);
        input.stage_distribution.insert("peak".into(), 1.0);
        input.relations = vec!["triple_combine".into(), "clash".into()];
        input.primary_pattern = Some("eating_god".into());
        input.favorable_element = Some("water".into());
        input.decade_element = Some("wood".into());
        input.year_element = Some("metal".into());
        input.markers = vec!["peach_blossom".into(), "ghost_gate".into()];
        input.western_element = Some("air".into());
        input.planet_houses.insert("venus".into(), "5".into());
        input.planet_houses.insert("saturn".into(), "10".into());
        input.planet_signs.insert("venus".into(), "pisces".into());
        input.planet_signs.insert("saturn".into(), "aries".into());
        input.aspects = vec![
            AspectInput::new("venus", "jupiter", "trine"),
            AspectInput::new("sun", "saturn", "opposition"),
        ];
        input.transits = vec!["saturn_square".into(), "jupiter_return".into()];
        input.minor_body_houses.insert("ceres".into(), "4".into());
        input.auxiliary_point_signs.insert("north_node".into(), "cancer".into());
        input
    }

    #[test]
    fn test_missing_dominant_element_is_rejected() {
        let mut input = rich_input();
        input.dominant_element = None;
        let err = engine().compute(&input, Locale::En).unwrap_err();
        assert_eq!(
            err,
            MatrixError::MissingRequiredField {
                field: TraitField::DominantElement
            }
        );

        input.dominant_element = Some("  ".into());
        assert!(engine().compute(&input, Locale::En).is_err());
    }

    #[test]
    fn test_unrecognized_dominant_element_degrades() {
        let result = engine()
            .compute(&TraitInput::new("plasma"), Locale::En)
            .unwrap();
        assert_eq!(result.matched_cells(), 0);
        assert_eq!(result.total_score(), 0);
    }

    #[test]
    fn test_rich_input_touches_every_layer() {
        let result = engine().compute(&rich_input(), Locale::En).unwrap();
        assert_eq!(result.layers_touched(), LayerId::COUNT);

        let summed: u32 = result.cells().map(|c| u32::from(c.score().value())).sum();
        assert_eq!(result.total_score(), summed);

        let summary = result.summary();
        assert!(summary.strength_points.len() <= 3);
        assert!(summary.caution_points.len() <= 3);
        assert!(summary.top_synergies.len() <= 3);
        assert!(summary
            .strength_points
            .iter()
            .all(|h| h.score.is_strength()));
        assert!(summary
            .caution_points
            .iter()
            .all(|h| matches!(h.polarity(), Polarity::Clash | Polarity::Conflict)));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let sequential = MatrixEngine::new(MatrixConfig {
            parallel_layers: false,
            ..Default::default()
        })
        .unwrap();
        let input = rich_input();
        for locale in Locale::ALL {
            assert_eq!(
                engine().compute(&input, locale).unwrap(),
                sequential.compute(&input, locale).unwrap()
            );
        }
    }

    #[test]
    fn test_highlight_limit_is_configurable() {
        let wide = MatrixEngine::new(MatrixConfig {
            highlight_limit: 50,
            ..Default::default()
        })
        .unwrap();
        let result = wide.compute(&rich_input(), Locale::Ko).unwrap();
        let strengths = result.cells().filter(|c| c.score().is_strength()).count();
        assert_eq!(result.summary().strength_points.len(), strengths);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = MatrixEngine::new(MatrixConfig {
            highlight_limit: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, MatrixError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_metadata() {
        let metadata = engine().metadata(Locale::En);
        assert_eq!(metadata.layers.len(), LayerId::COUNT);
        assert_eq!(metadata.layers[0].name, LayerId::ElementCore.name(Locale::En));
    }
}
