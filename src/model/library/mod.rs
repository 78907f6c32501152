//! Model Library
//!
//! Registry of built-in model descriptions, embedded at compile time. Every
//! backend needs at least the reference model so that the load-reference
//! operation of the contract can be fulfilled without external input.
//!
//! # Example
//!
//! ```
//! use simbridge::model::ModelLibrary;
//!
//! let library = ModelLibrary::builtin();
//! assert!(library.get(ModelLibrary::REFERENCE_MODEL_ID).is_some());
//! ```

use std::collections::HashMap;

use crate::model::description::ModelDescription;
use crate::model::errors::ModelError;

/// A registry of model descriptions keyed by model id
#[derive(Debug, Clone)]
pub struct ModelLibrary {
    models: HashMap<String, ModelDescription>,
}

// Embed built-in models at compile time
mod embedded {
    pub const REFERENCE_CASCADE: &str = include_str!("models/reference_cascade.json");
}

impl ModelLibrary {
    /// Id of the built-in reference model: a three-species first-order
    /// cascade with rate parameters `k1` and `k2`
    pub const REFERENCE_MODEL_ID: &'static str = "reference_cascade";

    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            models: HashMap::new(),
        }
    }

    /// Create a library with all built-in models
    pub fn builtin() -> Self {
        let mut library = Self::new();

        let embedded_models = [embedded::REFERENCE_CASCADE];

        for json in embedded_models {
            if let Ok(model) = ModelDescription::from_str(json) {
                library.models.insert(model.id.clone(), model);
            }
        }

        library
    }

    /// Get a model by id
    pub fn get(&self, id: &str) -> Option<&ModelDescription> {
        self.models.get(id)
    }

    /// The built-in reference model
    pub fn reference(&self) -> Result<&ModelDescription, ModelError> {
        self.get(Self::REFERENCE_MODEL_ID)
            .ok_or_else(|| ModelError::UnknownLibraryModel(Self::REFERENCE_MODEL_ID.to_string()))
    }

    /// List all model ids, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.models.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Add a model to the library, replacing any model with the same id
    pub fn insert(&mut self, model: ModelDescription) {
        self.models.insert(model.id.clone(), model);
    }
}

impl Default for ModelLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
