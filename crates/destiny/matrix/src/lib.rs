//! # Destiny Matrix
//!
//! Correlation engine that cross-references chronology traits with horoscope
//! traits through ten fixed interaction layers.
//!
//! ## Overview
//!
//! A computation runs in four stages:
//!
//! 1. **Resolve**: every layer reads its axes from the [`TraitInput`],
//!    normalizes raw labels to canonical tokens and looks up the Cartesian
//!    product of candidates in the [`Catalog`]
//! 2. **Aggregate**: matched scores are summed and split into strength
//!    (7 and above) and caution (4 and below) pools
//! 3. **Select**: pools are ranked into highlight lists
//! 4. **Synergize**: a secondary index groups matched cells by shared trait
//!    tokens across layers
//!
//! Missing or unrecognized traits never fail a computation; they only reduce
//! the number of matched cells. The one hard requirement is the dominant
//! element.
//!
//! ## Example
//!
//! ```rust,no_run
//! use destiny_matrix::{MatrixConfig, MatrixEngine};
//! use destiny_types::{Locale, SummaryView, TraitInput};
//!
//! let engine = MatrixEngine::new(MatrixConfig::default())?;
//!
//! let mut traits = TraitInput::new("wood");
//! traits.western_element = Some("fire".into());
//!
//! let result = engine.compute(&traits, Locale::En)?;
//! let summary = SummaryView::project(&result);
//! println!("total score: {}", summary.total_score);
//! # Ok::<(), destiny_matrix::MatrixError>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod normalize;
pub mod phase;
pub mod resolver;
pub mod synergy;

pub use catalog::{Axis, Catalog, LayerDefinition, KEY_SEPARATOR};
pub use config::MatrixConfig;
pub use engine::MatrixEngine;
pub use error::{MatrixError, Result};
pub use highlight::RankOrder;
pub use normalize::normalize;
pub use synergy::{SynergyIndex, SYNERGY_SCORE_FLOOR};

// Re-export the input and result types callers need alongside the engine
pub use destiny_types::{CalculationResult, Locale, TraitInput};
