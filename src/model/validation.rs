//! Structural validation of parsed model descriptions

use std::collections::HashSet;

use crate::model::description::ModelDescription;
use crate::model::errors::ModelError;

/// Validate a parsed model description.
///
/// Checks everything the serde layer cannot: name uniqueness, reaction
/// references, and finiteness of numeric fields. A description that passes
/// here is safe to load into a backend without further checks.
pub fn validate(model: &ModelDescription) -> Result<(), ModelError> {
    if model.species.is_empty() {
        return Err(ModelError::NoSpecies {
            id: model.id.clone(),
        });
    }

    let mut parameters = HashSet::new();
    for p in &model.parameters {
        if !parameters.insert(p.name.as_str()) {
            return Err(ModelError::DuplicateParameter(p.name.clone()));
        }
        if !p.value.is_finite() {
            return Err(ModelError::NonFinite {
                field: "parameter value",
                name: p.name.clone(),
            });
        }
    }

    let mut species = HashSet::new();
    for s in &model.species {
        if !species.insert(s.name.as_str()) {
            return Err(ModelError::DuplicateSpecies(s.name.clone()));
        }
        if !s.initial.is_finite() {
            return Err(ModelError::NonFinite {
                field: "initial concentration",
                name: s.name.clone(),
            });
        }
    }

    for r in &model.reactions {
        if !species.contains(r.from.as_str()) {
            return Err(ModelError::UndefinedSpecies {
                reaction: r.id.clone(),
                name: r.from.clone(),
            });
        }
        if let Some(to) = &r.to {
            if !species.contains(to.as_str()) {
                return Err(ModelError::UndefinedSpecies {
                    reaction: r.id.clone(),
                    name: to.clone(),
                });
            }
        }
        if !parameters.contains(r.rate.as_str()) {
            return Err(ModelError::UndefinedRateParameter {
                reaction: r.id.clone(),
                name: r.rate.clone(),
            });
        }
    }

    Ok(())
}
