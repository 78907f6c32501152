//! Closed-form time course of a first-order reaction network
//!
//! A network of first-order transfers and degradations has a constant rate
//! matrix A, so the state at `t + dt` is exactly `exp(A * dt) * x(t)`. The
//! sampler computes one matrix exponential per grid and propagates it row by
//! row, giving deterministic, evenly spaced output without an ODE solver.

use nalgebra::{DMatrix, DVector};
use ndarray::Array2;
use std::collections::HashMap;

use crate::model::ModelDescription;

/// Build the rate matrix of the network.
///
/// `values` holds the current parameter values in declaration order and
/// `index` maps parameter names to positions in it. The description must
/// already be validated; every reaction lookup is guaranteed to resolve.
pub(crate) fn rate_matrix(
    description: &ModelDescription,
    values: &[f64],
    index: &HashMap<String, usize>,
) -> DMatrix<f64> {
    let n = description.species.len();
    let species: HashMap<&str, usize> = description
        .species
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.as_str(), i))
        .collect();

    let mut a = DMatrix::zeros(n, n);
    for reaction in &description.reactions {
        let k = values[index[&reaction.rate]];
        let from = species[reaction.from.as_str()];
        a[(from, from)] -= k;
        if let Some(to) = &reaction.to {
            a[(species[to.as_str()], from)] += k;
        }
    }
    a
}

/// Sample the time course over `rows` evenly spaced points in
/// `[start, end]`, both endpoints included.
///
/// Column 0 is the time axis; columns 1.. hold the species in declaration
/// order. Initial concentrations apply at `start`. The caller checks
/// `start < end` and `rows > 0`.
pub(crate) fn sample(
    description: &ModelDescription,
    values: &[f64],
    index: &HashMap<String, usize>,
    start: f64,
    end: f64,
    rows: usize,
) -> Array2<f64> {
    let n = description.species.len();
    let mut table = Array2::zeros((rows, n + 1));

    let mut state = DVector::from_iterator(n, description.species.iter().map(|s| s.initial));
    table[[0, 0]] = start;
    for (j, v) in state.iter().enumerate() {
        table[[0, j + 1]] = *v;
    }
    if rows == 1 {
        return table;
    }

    let dt = (end - start) / (rows as f64 - 1.0);
    let step = (rate_matrix(description, values, index) * dt).exp();

    for i in 1..rows {
        state = &step * state;
        table[[i, 0]] = start + dt * i as f64;
        for (j, v) in state.iter().enumerate() {
            table[[i, j + 1]] = *v;
        }
    }

    table
}
