//! Engine errors

use destiny_types::{LayerId, TraitField};
use thiserror::Error;

/// Errors raised by the matrix engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Caller omitted a field the engine cannot work without
    #[error("missing required field: {field}")]
    MissingRequiredField { field: TraitField },

    /// A catalog layer failed validation when it was built
    #[error("catalog layer {layer} is corrupted: {reason}")]
    CatalogCorrupted { layer: LayerId, reason: String },

    /// The catalog does not hold the expected set of layers
    #[error("catalog is incomplete: {0}")]
    CatalogIncomplete(String),

    #[error("invalid engine configuration: {0}")]
    InvalidConfiguration(String),
}

impl MatrixError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, MatrixError::MissingRequiredField { .. })
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MatrixError>;
