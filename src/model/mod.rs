//! Model payload definition, validation, and built-in library
//!
//! Models are exchanged as structured JSON text describing a first-order
//! reaction network: named rate parameters, species with initial
//! concentrations, and transfer/degradation reactions between species.
//! Parsing ([`ModelDescription::from_str`]) and structural validation
//! ([`validate`]) are separate passes; a backend loads a model only after
//! both succeed.

pub mod description;
pub mod errors;
pub mod library;
pub mod validation;

pub use description::{
    ModelDescription, ParameterSpec, ReactionSpec, SpeciesSpec, SUPPORTED_SCHEMA_VERSIONS,
};
pub use errors::ModelError;
pub use library::ModelLibrary;
pub use validation::validate;
