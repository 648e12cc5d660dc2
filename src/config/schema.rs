use serde::{Deserialize, Serialize};

use crate::scoring::{PartialWeights, WeightConfig};

/// Contents of `config.yaml`.
///
/// Example YAML:
/// ```yaml
/// log_level: info
/// weights:
///   ageBonus: 40
///   minSubsistencePerPerson: 900
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset (e.g. "info", "credit_score=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Weight overrides; keys not listed keep their defaults
    #[serde(default, skip_serializing_if = "PartialWeights::is_empty")]
    pub weights: PartialWeights,
}

impl Config {
    /// Weights actually used for scoring.
    pub fn effective_weights(&self) -> WeightConfig {
        self.weights.merge_with_defaults()
    }
}
