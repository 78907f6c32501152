//! # simbridge
//!
//! Capability contract and in-process backend for time-course simulation of
//! first-order kinetic models.
//!
//! The crate is built around one trait, [`SimulatorBridge`]: load a model
//! from a structured JSON payload (or the built-in reference model),
//! enumerate and set its parameters, and run a simulation either to an
//! in-memory table or to a named CSV sink. [`KineticEngine`] implements the
//! contract in-process with closed-form kinetics; adapters to external
//! simulation processes implement the same trait.
//!
//! # Quick start
//!
//! ```
//! use simbridge::prelude::*;
//!
//! let mut engine = KineticEngine::new();
//! engine.load_reference_model()?;
//!
//! assert_eq!(engine.parameter_names()?, vec!["k1", "k2"]);
//! engine.set_parameter("k1", 0.5)?;
//!
//! let table = engine.simulate(0.0, 10.0, 11)?;
//! assert_eq!(table.nrows(), 11);
//! # Ok::<(), simbridge::BackendError>(())
//! ```

pub mod bridge;
pub mod engine;
pub mod error;
pub mod model;

pub use bridge::{SharedBridge, SimulatorBridge};
pub use engine::KineticEngine;
pub use error::BackendError;
pub use model::{ModelDescription, ModelLibrary};

pub mod prelude {
    pub use crate::bridge::{SharedBridge, SimulatorBridge};
    pub use crate::engine::KineticEngine;
    pub use crate::error::BackendError;
    pub use crate::model::{ModelDescription, ModelError, ModelLibrary};
}
