//! In-process backend adapter
//!
//! [`KineticEngine`] fulfils the [`SimulatorBridge`] contract with the
//! closed-form kinetics in [`kinetics`]. It is the conformance backend: the
//! contract can be exercised end to end without any external process, and an
//! out-of-process adapter must behave observably the same.

mod kinetics;
mod sink;

use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;

use crate::bridge::SimulatorBridge;
use crate::error::BackendError;
use crate::model::{validate, ModelDescription, ModelLibrary};

/// A loaded model with its live parameter set.
///
/// `values` is aligned with the description's parameter declaration order;
/// `index` resolves names for the set-parameter operation.
struct LoadedModel {
    description: ModelDescription,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl LoadedModel {
    fn new(description: ModelDescription) -> Self {
        let values = description.parameters.iter().map(|p| p.value).collect();
        let index = description
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self {
            description,
            values,
            index,
        }
    }
}

/// In-process simulation backend for first-order kinetic models.
///
/// Holds the "currently loaded model" state the contract itself does not
/// have: loading a model replaces the previous one together with its
/// parameter set, and every model-dependent operation fails with
/// [`BackendError::NoModelLoaded`] until a load succeeds.
pub struct KineticEngine {
    library: ModelLibrary,
    model: Option<LoadedModel>,
}

impl KineticEngine {
    pub fn new() -> Self {
        Self {
            library: ModelLibrary::builtin(),
            model: None,
        }
    }

    /// Engine backed by a custom model library
    pub fn with_library(library: ModelLibrary) -> Self {
        Self {
            library,
            model: None,
        }
    }

    fn loaded(&self) -> Result<&LoadedModel, BackendError> {
        self.model.as_ref().ok_or(BackendError::NoModelLoaded)
    }

    fn run(&self, start: f64, end: f64, rows: usize) -> Result<Array2<f64>, BackendError> {
        let model = self.loaded()?;
        if !(start < end) {
            return Err(BackendError::InvalidTimeSpan { start, end });
        }
        if rows == 0 {
            return Err(BackendError::InvalidRowCount);
        }
        Ok(kinetics::sample(
            &model.description,
            &model.values,
            &model.index,
            start,
            end,
            rows,
        ))
    }
}

impl Default for KineticEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorBridge for KineticEngine {
    fn load_model(&mut self, source: &str) -> Result<(), BackendError> {
        let description = ModelDescription::from_str(source)?;
        validate(&description)?;
        self.model = Some(LoadedModel::new(description));
        Ok(())
    }

    fn load_reference_model(&mut self) -> Result<(), BackendError> {
        let description = self.library.reference()?.clone();
        validate(&description)?;
        self.model = Some(LoadedModel::new(description));
        Ok(())
    }

    fn parameter_names(&self) -> Result<Vec<String>, BackendError> {
        Ok(self
            .loaded()?
            .description
            .parameters
            .iter()
            .map(|p| p.name.clone())
            .collect())
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), BackendError> {
        let model = self.model.as_mut().ok_or(BackendError::NoModelLoaded)?;
        let idx = *model
            .index
            .get(name)
            .ok_or_else(|| BackendError::UnknownParameter(name.to_string()))?;
        model.values[idx] = value;
        Ok(())
    }

    fn simulate_to_sink(
        &mut self,
        start: f64,
        end: f64,
        rows: usize,
        sink: &str,
    ) -> Result<(), BackendError> {
        let table = self.run(start, end, rows)?;
        let model = self.loaded()?;
        let species: Vec<&str> = model
            .description
            .species
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        sink::write_csv(Path::new(sink), &species, &table)?;
        Ok(())
    }

    fn simulate(&mut self, start: f64, end: f64, rows: usize) -> Result<Array2<f64>, BackendError> {
        self.run(start, end, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_fail_without_a_model() {
        let mut engine = KineticEngine::new();
        assert!(matches!(
            engine.parameter_names(),
            Err(BackendError::NoModelLoaded)
        ));
        assert!(matches!(
            engine.set_parameter("k1", 0.5),
            Err(BackendError::NoModelLoaded)
        ));
        assert!(matches!(
            engine.simulate(0.0, 1.0, 2),
            Err(BackendError::NoModelLoaded)
        ));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let mut engine = KineticEngine::new();
        engine.load_reference_model().unwrap();
        assert!(matches!(
            engine.set_parameter("k99", 0.5),
            Err(BackendError::UnknownParameter(_))
        ));
    }

    #[test]
    fn loading_replaces_model_and_parameter_set() {
        let mut engine = KineticEngine::new();
        engine.load_reference_model().unwrap();
        engine.set_parameter("k1", 9.0).unwrap();

        let json = r#"{
            "schema": "1.0",
            "id": "decay",
            "parameters": [ { "name": "kd", "value": 0.1 } ],
            "species": [ { "name": "a", "initial": 1.0 } ],
            "reactions": [ { "id": "r1", "from": "a", "rate": "kd" } ]
        }"#;
        engine.load_model(json).unwrap();

        assert_eq!(engine.parameter_names().unwrap(), vec!["kd".to_string()]);
        // The previous model's parameters are gone
        assert!(engine.set_parameter("k1", 0.5).is_err());
    }

    #[test]
    fn reloading_the_reference_model_resets_values() {
        let mut engine = KineticEngine::new();
        engine.load_reference_model().unwrap();
        engine.set_parameter("k1", 9.0).unwrap();
        engine.load_reference_model().unwrap();

        let table = engine.simulate(0.0, 1.0, 2).unwrap();
        // With the default k1 = 0.5, s1(1) = 100 * exp(-0.5)
        let expected = 100.0 * (-0.5f64).exp();
        assert!((table[[1, 1]] - expected).abs() < 1e-9);
    }

    #[test]
    fn invalid_library_model_is_rejected_on_load() {
        // Library insertion is unvalidated; the load must catch a model
        // whose reaction names an undeclared rate parameter
        let mut library = ModelLibrary::new();
        library.insert(ModelDescription {
            schema: "1.0".to_string(),
            id: ModelLibrary::REFERENCE_MODEL_ID.to_string(),
            parameters: vec![],
            species: vec![crate::model::SpeciesSpec {
                name: "a".to_string(),
                initial: 1.0,
            }],
            reactions: vec![crate::model::ReactionSpec {
                id: "r1".to_string(),
                from: "a".to_string(),
                to: None,
                rate: "missing".to_string(),
            }],
        });

        let mut engine = KineticEngine::with_library(library);
        assert!(matches!(
            engine.load_reference_model(),
            Err(BackendError::Model(_))
        ));
        // The failed load left no model behind
        assert!(matches!(
            engine.simulate(0.0, 1.0, 2),
            Err(BackendError::NoModelLoaded)
        ));
    }

    #[test]
    fn engine_without_reference_model_reports_it() {
        let mut engine = KineticEngine::with_library(ModelLibrary::new());
        assert!(matches!(
            engine.load_reference_model(),
            Err(BackendError::Model(_))
        ));
    }
}
