//! The simulation backend capability contract

use ndarray::Array2;

use crate::error::BackendError;

mod shared;
pub use shared::SharedBridge;

/// Capability contract toward a simulation backend.
///
/// An implementor (the adapter) lets callers load a model, inspect and set
/// its parameters, and run time-course simulations without knowing how the
/// backend is reached. All operations are synchronous, blocking calls; any
/// "model loaded" state lives in the adapter, not in this trait. Every
/// failure surfaces as a [`BackendError`] with no local recovery.
pub trait SimulatorBridge {
    /// Load a model from a structured JSON payload.
    ///
    /// Replaces any previously loaded model and its parameter set. Fails if
    /// the payload is malformed or the backend rejects it.
    fn load_model(&mut self, source: &str) -> Result<(), BackendError>;

    /// Load the backend's built-in reference model.
    ///
    /// Replaces any previously loaded model. Fails if the backend has no
    /// reference model available.
    fn load_reference_model(&mut self) -> Result<(), BackendError>;

    /// Names of the current model's parameters, in declaration order.
    ///
    /// Fails if no model is loaded.
    fn parameter_names(&self) -> Result<Vec<String>, BackendError>;

    /// Overwrite the value of a named parameter.
    ///
    /// The name must belong to the currently loaded model; an unknown name
    /// is a failure, never a silent ignore.
    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), BackendError>;

    /// Simulate the time course and write the output to a named sink.
    ///
    /// The destination identifier and output format are backend-defined;
    /// for the in-process backend it is a filesystem path receiving CSV.
    /// Fails if no model is loaded, `start >= end`, or `rows == 0`.
    fn simulate_to_sink(
        &mut self,
        start: f64,
        end: f64,
        rows: usize,
        sink: &str,
    ) -> Result<(), BackendError>;

    /// Simulate the time course and return it as an in-memory table.
    ///
    /// The result has exactly `rows` rows, evenly spaced over
    /// `[start, end]` inclusive, with column 0 the time axis and one further
    /// column per species in declaration order. Fails if no model is loaded,
    /// `start >= end`, or `rows == 0`.
    fn simulate(&mut self, start: f64, end: f64, rows: usize) -> Result<Array2<f64>, BackendError>;
}
