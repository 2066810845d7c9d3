use super::{compose_key, Axis, LayerDefinition};
use crate::error::{MatrixError, Result};
use crate::normalize;
use destiny_types::{InteractionRecord, LayerId, LocalizedText, Score, TraitCategory};
use std::collections::HashMap;

/// Collects cells for one layer and validates them on [`LayerBuilder::build`]
///
/// Problems are recorded as cells are added and reported together, so a
/// generator never has to handle errors mid-loop.
#[derive(Debug)]
pub struct LayerBuilder {
    id: LayerId,
    axes: Vec<Axis>,
    categories: Vec<TraitCategory>,
    capacity: usize,
    cells: HashMap<String, InteractionRecord>,
    problems: Vec<String>,
}

impl LayerBuilder {
    pub fn new(id: LayerId, axes: Vec<Axis>, capacity: usize) -> Self {
        let categories = axes.iter().flat_map(Axis::categories).collect();
        Self {
            id,
            axes,
            categories,
            capacity,
            cells: HashMap::new(),
            problems: Vec::new(),
        }
    }

    /// Add a cell keyed by canonical tokens in axis order
    pub fn cell(
        &mut self,
        tokens: &[&str],
        score: u8,
        ko: impl Into<String>,
        en: impl Into<String>,
    ) -> &mut Self {
        let key = compose_key(tokens);

        if tokens.len() != self.categories.len() {
            self.problems.push(format!(
                "key '{key}' has {} tokens, expected {}",
                tokens.len(),
                self.categories.len()
            ));
            return self;
        }

        for (token, category) in tokens.iter().zip(&self.categories) {
            if !normalize::is_canonical(*category, token) {
                self.problems
                    .push(format!("key '{key}': '{token}' is not a canonical {category}"));
                return self;
            }
        }

        let Some(score) = Score::new(score) else {
            self.problems
                .push(format!("key '{key}': score {score} outside 1..=10"));
            return self;
        };

        let record = InteractionRecord::new(LocalizedText::new(ko, en), score);
        if self.cells.insert(key.clone(), record).is_some() {
            self.problems.push(format!("duplicate key '{key}'"));
        }
        self
    }

    /// Validate and freeze the layer
    pub fn build(self) -> Result<LayerDefinition> {
        let mut problems = self.problems;
        if self.cells.is_empty() {
            problems.push("layer has no cells".to_string());
        }
        if self.cells.len() > self.capacity {
            problems.push(format!(
                "{} cells exceed declared capacity {}",
                self.cells.len(),
                self.capacity
            ));
        }
        if let Some(reason) = problems.into_iter().next() {
            tracing::error!(layer = %self.id, %reason, "catalog layer failed validation");
            return Err(MatrixError::CatalogCorrupted {
                layer: self.id,
                reason,
            });
        }

        Ok(LayerDefinition {
            id: self.id,
            axes: self.axes,
            capacity: self.capacity,
            cells: self.cells,
        })
    }
}
