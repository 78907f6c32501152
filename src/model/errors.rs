//! Error types for model payload parsing and validation

use thiserror::Error;

/// Errors that can occur when parsing or validating a model description
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to parse the JSON payload
    #[error("Failed to parse model description: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unsupported schema version
    #[error("Unsupported schema version '{version}'. Supported versions: {supported}")]
    UnsupportedSchema { version: String, supported: String },

    /// A model must declare at least one species
    #[error("Model '{id}' declares no species")]
    NoSpecies { id: String },

    /// Parameter names must be unique within a model
    #[error("Duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    /// Species names must be unique within a model
    #[error("Duplicate species name '{0}'")]
    DuplicateSpecies(String),

    /// A reaction references a species the model does not declare
    #[error("Reaction '{reaction}' references undefined species '{name}'")]
    UndefinedSpecies { reaction: String, name: String },

    /// A reaction rate references a parameter the model does not declare
    #[error("Reaction '{reaction}' references undefined rate parameter '{name}'")]
    UndefinedRateParameter { reaction: String, name: String },

    /// Parameter values and initial concentrations must be finite
    #[error("Non-finite {field} for '{name}'")]
    NonFinite { field: &'static str, name: String },

    /// The requested library model does not exist
    #[error("Unknown library model '{0}'")]
    UnknownLibraryModel(String),
}
