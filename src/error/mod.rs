use thiserror::Error;

use crate::model::errors::ModelError;

/// Failure signal of every contract operation.
///
/// Each variant carries a human-readable message through `Display`.
/// Operations propagate this unchanged to the caller; there is no local
/// recovery or retry inside the bridge.
#[derive(Error, Debug)]
pub enum BackendError {
    /// A model-dependent operation was called before any model was loaded
    #[error("no model is loaded")]
    NoModelLoaded,

    /// The parameter name does not belong to the currently loaded model
    #[error("unknown parameter '{0}' in the current model")]
    UnknownParameter(String),

    /// The requested simulation window is empty or inverted
    #[error("invalid simulation window: start {start} must be strictly before end {end}")]
    InvalidTimeSpan { start: f64, end: f64 },

    /// A simulation was requested with zero output rows
    #[error("row count must be at least 1")]
    InvalidRowCount,

    /// The model payload could not be parsed or validated
    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    /// Writing simulation output to the named sink failed
    #[error("failed to write simulation output: {0}")]
    Sink(#[from] csv::Error),

    /// Any other backend-reported failure
    #[error("backend failure: {0}")]
    Backend(String),
}
