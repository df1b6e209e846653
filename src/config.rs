//! JSON engine configuration.
//!
//! An [`EngineConfig`] captures everything a [`DistanceEngine`] holds, plus
//! a preferred [`Variant`]. Every field is optional in the JSON form:
//!
//! ```json
//! {
//!   "costs": { "addition": 0.2, "deletion": 0.2, "transposition": 0.5 },
//!   "overrides": [ { "a": "g", "b": "b", "cost": 0.5 } ],
//!   "variant": "damerau-levenshtein"
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::CostProfile;
use crate::engine::DistanceEngine;
use crate::error::DistanceError;
use crate::substitution::SubstitutionOverrides;
use crate::variant::Variant;

/// Errors that can occur while loading or applying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed JSON or unexpected field types
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Error reading the configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration parsed but holds invalid costs
    #[error("invalid configuration: {0}")]
    Invalid(#[from] DistanceError),
}

/// One symmetric substitution override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// One character of the pair.
    pub a: char,
    /// The other character of the pair.
    pub b: char,
    /// Cost of substituting one for the other.
    pub cost: f64,
}

/// Serializable engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Operation costs; missing weights default to 1.
    pub costs: CostProfile,
    /// Per-pair substitution overrides.
    pub overrides: Vec<OverrideRule>,
    /// Variant to use when the caller does not pick one.
    pub variant: Variant,
}

impl EngineConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write this configuration as pretty-printed JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), ConfigError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Serialize this configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an engine, validating every cost and override.
    ///
    /// Deserialization bypasses the cost setters, so the weights are
    /// re-checked here. As with the setters, an inconsistent transposition
    /// cost is only reported when computing.
    pub fn build_engine(&self) -> Result<DistanceEngine, ConfigError> {
        let costs = CostProfile::new(
            self.costs.addition(),
            self.costs.deletion(),
            self.costs.substitution(),
            self.costs.transposition(),
        )?;

        let mut overrides = SubstitutionOverrides::new();
        for rule in &self.overrides {
            overrides.insert(rule.a, rule.b, rule.cost)?;
        }

        Ok(DistanceEngine::with_config(costs, overrides))
    }
}

impl From<&DistanceEngine> for EngineConfig {
    fn from(engine: &DistanceEngine) -> Self {
        let mut overrides: Vec<OverrideRule> = engine
            .overrides()
            .iter()
            .map(|(a, b, cost)| OverrideRule { a, b, cost })
            .collect();
        overrides.sort_by(|x, y| (x.a, x.b).cmp(&(y.a, y.b)));

        Self {
            costs: *engine.costs(),
            overrides,
            variant: Variant::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Operation;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.build_engine().unwrap(), DistanceEngine::new());
    }

    #[test]
    fn test_partial_costs() {
        let config = EngineConfig::from_json_str(
            r#"{ "costs": { "addition": 0.2, "deletion": 0.2, "transposition": 0.5 },
                 "variant": "damerau-levenshtein" }"#,
        )
        .unwrap();

        assert_eq!(config.costs.substitution(), 1.0);
        assert_eq!(config.variant, Variant::DamerauLevenshtein);

        let engine = config.build_engine().unwrap();
        assert_eq!(engine.compute("ogat", "goat", config.variant).unwrap(), 0.4);
    }

    #[test]
    fn test_overrides() {
        let config = EngineConfig::from_json_str(
            r#"{ "overrides": [ { "a": "g", "b": "b", "cost": 0.5 } ] }"#,
        )
        .unwrap();

        let engine = config.build_engine().unwrap();
        assert_eq!(engine.compute("boat", "goat", Variant::Levenshtein).unwrap(), 0.5);
    }

    #[test]
    fn test_invalid_cost_rejected_on_build() {
        let config = EngineConfig::from_json_str(r#"{ "costs": { "deletion": -1.0 } }"#).unwrap();
        match config.build_engine() {
            Err(ConfigError::Invalid(DistanceError::InvalidCost { operation, .. })) => {
                assert_eq!(operation, Operation::Deletion)
            }
            other => panic!("expected invalid cost, got {:?}", other),
        }

        let config = EngineConfig::from_json_str(
            r#"{ "overrides": [ { "a": "x", "b": "y", "cost": 0 } ] }"#,
        )
        .unwrap();
        assert!(matches!(config.build_engine(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "costs": "cheap" }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "variant": "merge-and-split" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_engine_config_reload() {
        let engine = DistanceEngine::builder()
            .addition(2.0)
            .transposition(1.5)
            .substitution_override('m', 'n', 0.3)
            .build()
            .unwrap();

        let json = EngineConfig::from(&engine).to_json_string().unwrap();
        let reloaded = EngineConfig::from_json_str(&json).unwrap().build_engine().unwrap();
        assert_eq!(reloaded, engine);
    }
}
