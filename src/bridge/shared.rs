use std::sync::{Arc, Mutex, MutexGuard};

use ndarray::Array2;

use crate::bridge::SimulatorBridge;
use crate::error::BackendError;

/// A clonable handle serializing access to a single backend.
///
/// Backends fronting one external process are a serially-accessed resource:
/// at most one model-mutation or simulation call may be in flight at a time.
/// This wrapper enforces that with a scoped exclusive lock around each
/// contract call, so one adapter can be shared across threads. A poisoned
/// lock surfaces as [`BackendError::Backend`].
pub struct SharedBridge<B> {
    inner: Arc<Mutex<B>>,
}

impl<B> SharedBridge<B> {
    pub fn new(backend: B) -> Self {
        Self {
            inner: Arc::new(Mutex::new(backend)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, B>, BackendError> {
        self.inner
            .lock()
            .map_err(|_| BackendError::Backend("backend lock poisoned".to_string()))
    }
}

impl<B> Clone for SharedBridge<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: SimulatorBridge> SimulatorBridge for SharedBridge<B> {
    fn load_model(&mut self, source: &str) -> Result<(), BackendError> {
        self.lock()?.load_model(source)
    }

    fn load_reference_model(&mut self) -> Result<(), BackendError> {
        self.lock()?.load_reference_model()
    }

    fn parameter_names(&self) -> Result<Vec<String>, BackendError> {
        self.lock()?.parameter_names()
    }

    fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), BackendError> {
        self.lock()?.set_parameter(name, value)
    }

    fn simulate_to_sink(
        &mut self,
        start: f64,
        end: f64,
        rows: usize,
        sink: &str,
    ) -> Result<(), BackendError> {
        self.lock()?.simulate_to_sink(start, end, rows, sink)
    }

    fn simulate(&mut self, start: f64, end: f64, rows: usize) -> Result<Array2<f64>, BackendError> {
        self.lock()?.simulate(start, end, rows)
    }
}
