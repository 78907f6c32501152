//! The model-exchange payload

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::errors::ModelError;

/// Supported schema versions
pub const SUPPORTED_SCHEMA_VERSIONS: &[&str] = &["1.0"];

/// A first-order kinetic model defined in JSON.
///
/// This is the structured text payload accepted by the load-model operation.
/// Declaration order is significant: parameters are enumerated in the order
/// they appear here, and species define the column order of simulation output.
///
/// # Example
///
/// ```
/// use simbridge::model::ModelDescription;
///
/// let json = r#"{
///     "schema": "1.0",
///     "id": "decay",
///     "parameters": [ { "name": "k", "value": 0.1 } ],
///     "species": [ { "name": "a", "initial": 1.0 } ],
///     "reactions": [ { "id": "r1", "from": "a", "rate": "k" } ]
/// }"#;
///
/// let model = ModelDescription::from_str(json).unwrap();
/// assert_eq!(model.id, "decay");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDescription {
    /// Schema version (e.g., "1.0")
    pub schema: String,

    /// Unique model identifier
    pub id: String,

    /// Tunable rate parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// State variables, in declaration (output column) order
    pub species: Vec<SpeciesSpec>,

    /// First-order transfer and degradation reactions
    #[serde(default)]
    pub reactions: Vec<ReactionSpec>,
}

/// A named rate parameter with its default value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSpec {
    pub name: String,
    pub value: f64,
}

/// A state variable with its initial concentration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesSpec {
    pub name: String,
    #[serde(default)]
    pub initial: f64,
}

/// A first-order reaction: `from` converts to `to` at the rate named by
/// `rate`. Without a `to` species, the reaction is a degradation and mass
/// leaves the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReactionSpec {
    pub id: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub rate: String,
}

impl ModelDescription {
    /// Parse a model description from a JSON string.
    ///
    /// Checks the schema version but performs no structural validation;
    /// see [`crate::model::validate`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ModelError> {
        let model: ModelDescription = serde_json::from_str(json)?;

        if !SUPPORTED_SCHEMA_VERSIONS.contains(&model.schema.as_str()) {
            return Err(ModelError::UnsupportedSchema {
                version: model.schema.clone(),
                supported: SUPPORTED_SCHEMA_VERSIONS.join(", "),
            });
        }

        Ok(model)
    }

    /// Parse a model description from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Parse(serde_json::Error::io(e)))?;
        Self::from_str(&json)
    }
}
