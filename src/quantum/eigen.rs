// src/quantum/eigen.rs
//! Eigen-decomposed power gates
//!
//! A gate family is described by its eigen components `(λ_k, P_k)`: an
//! eigenvalue in half turns and the projector onto its eigenspace. Raising
//! the family to exponent `t` with global shift `s` gives
//!
//! ```text
//! U(t) = Σ_k exp(iπ·t·(λ_k + s)) · P_k
//! ```
//!
//! The shift only moves the global phase, but it also changes the period of
//! the family in `t`, so two gates with different shifts are different gates.

use std::collections::BTreeSet;
use std::f64::consts::PI;

use ndarray::Array2;
use num_complex::Complex64;

use super::gate::QuantumGate;
use super::param::{Param, ParamResolver};
use crate::error::{GateError, Result};

/// Denominator used to rationalize periods before taking their LCM
const PERIOD_DENOMINATOR: i64 = 60;

/// Tolerance for accepting a rationalized common period
const PERIOD_REJECT_ATOL: f64 = 1e-8;

/// One eigenspace of a gate family
#[derive(Debug, Clone, PartialEq)]
pub struct EigenComponent {
    /// Eigenvalue in half turns (the eigenvalue of the base gate is `exp(iπλ)`)
    pub half_turns: f64,
    /// Orthogonal projector onto the eigenspace
    pub projector: Array2<Complex64>,
}

impl EigenComponent {
    pub fn new(half_turns: f64, projector: Array2<Complex64>) -> Self {
        Self {
            half_turns,
            projector,
        }
    }
}

/// A gate family parameterized by an exponent and a global phase shift
pub trait EigenGate: QuantumGate + Sized {
    /// The eigen components of the exponent-1, shift-0 member of the family
    fn eigen_components(&self) -> Vec<EigenComponent>;

    fn exponent(&self) -> &Param;

    fn global_shift(&self) -> f64;

    /// Same family and shift with a new exponent
    fn with_exponent(&self, exponent: Param) -> Self;

    /// Eigenvalues in half turns after applying the global shift
    fn eigen_shifts(&self) -> Vec<f64> {
        let shift = self.global_shift();
        self.eigen_components()
            .iter()
            .map(|c| c.half_turns + shift)
            .collect()
    }

    /// Smallest `T > 0` with `U(t + T) = U(t)`, if one exists
    fn period(&self) -> Option<f64> {
        let periods: Vec<f64> = self
            .eigen_shifts()
            .into_iter()
            .filter(|&e| e != 0.0)
            .map(|e| (2.0 / e).abs())
            .collect();
        approximate_common_period(&periods)
    }

    /// Exponent reduced into `[0, period)`
    fn canonical_exponent(&self) -> Param {
        match (self.exponent().value(), self.period()) {
            (Some(t), Some(period)) => Param::Float(t.rem_euclid(period)),
            _ => self.exponent().clone(),
        }
    }

    fn is_parameterized(&self) -> bool {
        self.exponent().is_parameterized()
    }

    fn parameter_names(&self) -> BTreeSet<String> {
        self.exponent().parameter_names()
    }

    /// Bind symbols in the exponent. Unbound symbols stay symbolic.
    fn resolve(&self, resolver: &ParamResolver) -> Self {
        self.with_exponent(self.exponent().resolve(resolver))
    }

    /// Raise the gate to a real power
    fn pow(&self, power: f64) -> Self {
        self.with_exponent(self.exponent().clone() * power)
    }

    fn inverse(&self) -> Self {
        self.pow(-1.0)
    }

    /// The unitary `Σ_k exp(iπ·t·(λ_k + s)) · P_k`
    fn eigen_unitary(&self) -> Result<Array2<Complex64>> {
        let t = self.exponent().value().ok_or_else(|| {
            GateError::parameterized(self.name(), self.parameter_names())
        })?;
        let shift = self.global_shift();
        let dim = 1 << self.qubit_count();
        let mut unitary = Array2::<Complex64>::zeros((dim, dim));
        for component in self.eigen_components() {
            let phase = Complex64::from_polar(1.0, PI * t * (component.half_turns + shift));
            unitary.scaled_add(phase, &component.projector);
        }
        Ok(unitary)
    }

    /// Upper bound on the trace distance between the gate and the identity
    fn trace_distance_bound(&self) -> Option<f64> {
        let t = self.exponent().value()?;
        let angles: Vec<f64> = self
            .eigen_shifts()
            .into_iter()
            .map(|e| PI * (e * t).rem_euclid(2.0))
            .collect();
        Some(trace_distance_from_angles(&angles))
    }

    /// Same shift and canonical exponents within `atol`, modulo the period
    fn approx_eq(&self, other: &Self, atol: f64) -> bool {
        if (self.global_shift() - other.global_shift()).abs() > atol {
            return false;
        }
        match (self.canonical_exponent(), other.canonical_exponent()) {
            (Param::Float(a), Param::Float(b)) => {
                let diff = (a - b).abs();
                match self.period() {
                    Some(period) => diff <= atol || (period - diff).abs() <= atol,
                    None => diff <= atol,
                }
            }
            (a, b) => a == b,
        }
    }
}

/// Trace distance bound for a unitary with the given eigenphases (radians).
///
/// The bound comes from the largest gap between neighbouring phases on the
/// unit circle.
pub fn trace_distance_from_angles(angles: &[f64]) -> f64 {
    if angles.is_empty() {
        return 0.0;
    }
    let mut sorted = angles.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut max_gap = 2.0 * PI + sorted[0] - sorted[sorted.len() - 1];
    for pair in sorted.windows(2) {
        max_gap = max_gap.max(pair[1] - pair[0]);
    }
    if max_gap <= PI {
        1.0
    } else {
        (0.5 * max_gap).sin().max(0.0)
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a.abs()
}

/// Common period of a set of real periods.
///
/// Each period is rounded to a multiple of `1/60`; the LCM of those fractions
/// is returned only if it is an integer multiple of every input period.
pub fn approximate_common_period(periods: &[f64]) -> Option<f64> {
    if periods.is_empty() || periods.iter().any(|p| !p.is_finite() || *p == 0.0) {
        return None;
    }

    // LCM of n_i/d_i is lcm(n_i)/gcd(d_i) once each fraction is reduced
    let mut num_lcm: i64 = 1;
    let mut den_gcd: i64 = 0;
    for p in periods {
        let scaled = (p.abs() * PERIOD_DENOMINATOR as f64).round();
        if scaled < 1.0 || scaled > i64::MAX as f64 / PERIOD_DENOMINATOR as f64 {
            return None;
        }
        let n = scaled as i64;
        let g = gcd(n, PERIOD_DENOMINATOR);
        let (n, d) = (n / g, PERIOD_DENOMINATOR / g);
        num_lcm = num_lcm.checked_mul(n / gcd(num_lcm, n))?;
        den_gcd = gcd(den_gcd, d);
    }
    let common = num_lcm as f64 / den_gcd as f64;

    for p in periods {
        let p = p.abs();
        if (p * (common / p).round() - common).abs() > PERIOD_REJECT_ATOL {
            return None;
        }
    }
    Some(common)
}
