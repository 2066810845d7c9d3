//! Engine configuration

use crate::error::{MatrixError, Result};
use destiny_types::LayerId;
use serde::{Deserialize, Serialize};

/// Tunables of the ranking and evaluation stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Entries kept per highlight list
    #[serde(default = "default_highlight_limit")]
    pub highlight_limit: usize,

    /// Distinct layers a shared trait needs to count as a synergy
    #[serde(default = "default_synergy_min_layers")]
    pub synergy_min_layers: usize,

    /// Evaluate layers on the rayon pool
    #[serde(default = "default_parallel_layers")]
    pub parallel_layers: bool,
}

fn default_highlight_limit() -> usize {
    3
}

fn default_synergy_min_layers() -> usize {
    2
}

fn default_parallel_layers() -> bool {
    true
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            highlight_limit: default_highlight_limit(),
            synergy_min_layers: default_synergy_min_layers(),
            parallel_layers: default_parallel_layers(),
        }
    }
}

impl MatrixConfig {
    pub fn validate(&self) -> Result<()> {
        if self.highlight_limit == 0 {
            return Err(MatrixError::InvalidConfiguration(
                "highlight_limit must be at least 1".into(),
            ));
        }
        if !(2..=LayerId::COUNT).contains(&self.synergy_min_layers) {
            return Err(MatrixError::InvalidConfiguration(format!(
                "synergy_min_layers must be between 2 and {}",
                LayerId::COUNT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatrixConfig::default();
        assert_eq!(config.highlight_limit, 3);
        assert_eq!(config.synergy_min_layers, 2);
        assert!(config.parallel_layers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: MatrixConfig = serde_json::from_str(r#"{"highlight_limit": 5}"#).unwrap();
        assert_eq!(config.highlight_limit, 5);
        assert_eq!(config.synergy_min_layers, 2);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MatrixConfig {
            highlight_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MatrixConfig {
            synergy_min_layers: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MatrixConfig {
            synergy_min_layers: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
