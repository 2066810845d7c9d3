//! # Destiny Types
//!
//! Core types for the Destiny Correlation Matrix.
//!
//! The matrix cross-references the output of two independent symbolic systems:
//!
//! - **Chronology**: four-pillar elements, ten relational roles, twelve growth
//!   stages, structural relations, patterns and auxiliary markers
//! - **Horoscope**: tropical element, planet/sign/house placements, aspects,
//!   transits, minor bodies and sensitive points
//!
//! ## Key Concepts
//!
//! - [`TraitInput`]: Flat record of optional traits supplied by the caller
//! - [`LayerId`]: One of the ten fixed correlation layers
//! - [`InteractionRecord`]: Keyword plus a [`Score`] whose [`Polarity`] is derived
//! - [`MatchedCell`]: A catalog cell realized by the caller's traits
//! - [`CalculationResult`]: Full internal result (never serialized)
//! - [`SummaryView`]: Public projection of a result
//! - [`CatalogMetadata`]: Public description of the catalog shape
//!
//! ## Boundary Asymmetry
//!
//! [`CalculationResult`] carries every matched cell and deliberately does not
//! implement `Serialize`. Only [`SummaryView`] and [`CatalogMetadata`] cross a
//! service boundary.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod layer;
pub mod locale;
pub mod metadata;
pub mod record;
pub mod result;
pub mod summary;
pub mod traits;

// Re-export main types
pub use layer::LayerId;
pub use locale::{Locale, LocalizedText, UnsupportedLocale};
pub use metadata::{CatalogMetadata, LayerMetadata, PolarityBand};
pub use record::{InteractionRecord, Polarity, Score};
pub use result::{CalculationResult, Highlight, MatchedCell, MatrixSummary, Synergy, TraitToken};
pub use summary::{HighlightView, SummaryView, SynergyView, PUBLIC_HIGHLIGHT_LIMIT};
pub use traits::{AspectInput, FieldValues, TraitCategory, TraitField, TraitInput};
