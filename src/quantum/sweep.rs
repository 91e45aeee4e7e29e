// src/quantum/sweep.rs
//! Parameter sweeps
//!
//! A sweep is an ordered list of parameter bindings. Binding a symbolic gate
//! over a sweep is embarrassingly parallel, so it runs on rayon's pool.

use std::collections::BTreeSet;

use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::eigen::EigenGate;
use super::param::ParamResolver;
use crate::error::Result;

/// An ordered collection of parameter bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sweep {
    /// Explicit values for one symbol
    Points { symbol: String, values: Vec<f64> },

    /// `length` evenly spaced values from `start` to `stop`, both inclusive
    Linspace {
        symbol: String,
        start: f64,
        stop: f64,
        length: usize,
    },

    /// Cartesian product; later factors vary fastest.
    ///
    /// When two factors bind the same symbol the later factor's value wins,
    /// and `len()` still counts every combination.
    Product(Vec<Sweep>),
}

impl Sweep {
    pub fn points(symbol: impl Into<String>, values: Vec<f64>) -> Self {
        Sweep::Points {
            symbol: symbol.into(),
            values,
        }
    }

    pub fn linspace(symbol: impl Into<String>, start: f64, stop: f64, length: usize) -> Self {
        Sweep::Linspace {
            symbol: symbol.into(),
            start,
            stop,
            length,
        }
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        match self {
            Sweep::Points { values, .. } => values.len(),
            Sweep::Linspace { length, .. } => *length,
            Sweep::Product(factors) => factors.iter().map(Sweep::len).product(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbols bound by this sweep
    pub fn keys(&self) -> BTreeSet<String> {
        match self {
            Sweep::Points { symbol, .. } | Sweep::Linspace { symbol, .. } => {
                BTreeSet::from([symbol.clone()])
            }
            Sweep::Product(factors) => factors.iter().flat_map(Sweep::keys).collect(),
        }
    }

    fn values(&self) -> Vec<f64> {
        match self {
            Sweep::Points { values, .. } => values.clone(),
            Sweep::Linspace {
                start,
                stop,
                length,
                ..
            } => match *length {
                0 => Vec::new(),
                1 => vec![*start],
                n => {
                    let span = stop - start;
                    let last = (n - 1) as f64;
                    let mut values: Vec<f64> =
                        (0..n).map(|i| start + span * i as f64 / last).collect();
                    // The endpoint is exact even when the span rounds
                    values[n - 1] = *stop;
                    values
                }
            },
            Sweep::Product(_) => Vec::new(),
        }
    }

    /// Every binding, in sweep order
    pub fn resolvers(&self) -> Vec<ParamResolver> {
        match self {
            Sweep::Points { symbol, .. } | Sweep::Linspace { symbol, .. } => self
                .values()
                .into_iter()
                .map(|v| ParamResolver::new().with(symbol.clone(), v))
                .collect(),
            Sweep::Product(factors) => {
                let mut acc = vec![ParamResolver::new()];
                for factor in factors {
                    let inner = factor.resolvers();
                    acc = acc
                        .iter()
                        .flat_map(|outer| {
                            inner.iter().map(move |r| {
                                let mut merged = outer.clone();
                                for (k, v) in r.iter() {
                                    merged.insert(k, v);
                                }
                                merged
                            })
                        })
                        .collect();
                }
                acc
            }
        }
    }
}

/// Bind `gate` at every point of `sweep`, preserving sweep order
pub fn resolve_sweep<G>(gate: &G, sweep: &Sweep) -> Vec<G>
where
    G: EigenGate,
{
    let resolvers = sweep.resolvers();
    debug!(gate = %gate.name(), points = resolvers.len(), "resolving gate over sweep");
    resolvers.par_iter().map(|r| gate.resolve(r)).collect()
}

/// Unitaries of `gate` at every point of `sweep`.
///
/// Fails if any point leaves a symbol unbound.
pub fn unitaries_over_sweep<G>(gate: &G, sweep: &Sweep) -> Result<Vec<Array2<Complex64>>>
where
    G: EigenGate,
{
    let resolvers = sweep.resolvers();
    debug!(gate = %gate.name(), points = resolvers.len(), "computing unitaries over sweep");
    resolvers
        .par_iter()
        .map(|r| gate.resolve(r).eigen_unitary())
        .collect()
}
