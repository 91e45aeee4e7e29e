// src/quantum/pow_gates.rs
//! Two-qubit power-gate families
//!
//! [`ZZPowGate`] is the family of Z⊗Z rotations and [`ISwapPowGate`] the
//! family of partial iSWAPs (rotations in the |01⟩, |10⟩ subspace). Both
//! follow the [`EigenGate`] convention.

use std::any::Any;
use std::fmt;

use ndarray::{array, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::eigen::{EigenComponent, EigenGate};
use super::gate::constants::{ONE, ZERO};
use super::gate::QuantumGate;
use super::param::Param;
use crate::error::Result;

fn fmt_power(f: &mut fmt::Formatter<'_>, base: &str, exponent: &Param) -> fmt::Result {
    match exponent {
        Param::Float(t) if *t == 1.0 => write!(f, "{}", base),
        Param::Float(_) | Param::Symbol(_) => write!(f, "{}**{}", base, exponent),
        _ => write!(f, "{}**({})", base, exponent),
    }
}

/// Projector onto |00⟩ and |11⟩
fn even_parity_projector() -> Array2<Complex64> {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE]
    ]
}

/// Projector onto |01⟩ and |10⟩
fn odd_parity_projector() -> Array2<Complex64> {
    array![
        [ZERO, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, ZERO]
    ]
}

/// Projector onto (|01⟩ + sign·|10⟩)/√2
fn odd_bell_projector(sign: f64) -> Array2<Complex64> {
    let half = Complex64::new(0.5, 0.0);
    let off = Complex64::new(0.5 * sign, 0.0);
    array![
        [ZERO, ZERO, ZERO, ZERO],
        [ZERO, half, off, ZERO],
        [ZERO, off, half, ZERO],
        [ZERO, ZERO, ZERO, ZERO]
    ]
}

/// `ZZ**t`: phases |01⟩ and |10⟩ by `exp(iπt)` relative to |00⟩ and |11⟩.
///
/// With global shift `-0.5` the unitary is `exp(-iπt/2 · Z⊗Z)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZZPowGate {
    exponent: Param,
    global_shift: f64,
}

impl ZZPowGate {
    pub fn new(exponent: impl Into<Param>) -> Self {
        Self::with_global_shift(exponent, 0.0)
    }

    pub fn with_global_shift(exponent: impl Into<Param>, global_shift: f64) -> Self {
        Self {
            exponent: exponent.into(),
            global_shift,
        }
    }
}

impl EigenGate for ZZPowGate {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, even_parity_projector()),
            EigenComponent::new(1.0, odd_parity_projector()),
        ]
    }

    fn exponent(&self) -> &Param {
        &self.exponent
    }

    fn global_shift(&self) -> f64 {
        self.global_shift
    }

    fn with_exponent(&self, exponent: Param) -> Self {
        Self {
            exponent,
            global_shift: self.global_shift,
        }
    }
}

impl QuantumGate for ZZPowGate {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn qubit_count(&self) -> usize {
        2
    }

    fn matrix(&self) -> Result<Array2<Complex64>> {
        self.eigen_unitary()
    }

    fn name(&self) -> String {
        "ZZ".to_string()
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }

    fn adjoint(&self) -> Result<Box<dyn QuantumGate>> {
        Ok(Box::new(self.inverse()))
    }
}

impl PartialEq for ZZPowGate {
    fn eq(&self, other: &Self) -> bool {
        self.global_shift == other.global_shift
            && self.canonical_exponent() == other.canonical_exponent()
    }
}

impl fmt::Display for ZZPowGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_power(f, "ZZ", &self.exponent)
    }
}

/// `ISWAP**t`: rotates within the |01⟩, |10⟩ subspace.
///
/// `ISWAP**t` maps |01⟩ to `cos(πt/2)|01⟩ + i·sin(πt/2)|10⟩`; |00⟩ and |11⟩
/// are fixed (up to the global shift).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ISwapPowGate {
    exponent: Param,
    global_shift: f64,
}

impl ISwapPowGate {
    pub fn new(exponent: impl Into<Param>) -> Self {
        Self::with_global_shift(exponent, 0.0)
    }

    pub fn with_global_shift(exponent: impl Into<Param>, global_shift: f64) -> Self {
        Self {
            exponent: exponent.into(),
            global_shift,
        }
    }
}

impl EigenGate for ISwapPowGate {
    fn eigen_components(&self) -> Vec<EigenComponent> {
        vec![
            EigenComponent::new(0.0, even_parity_projector()),
            EigenComponent::new(0.5, odd_bell_projector(1.0)),
            EigenComponent::new(-0.5, odd_bell_projector(-1.0)),
        ]
    }

    fn exponent(&self) -> &Param {
        &self.exponent
    }

    fn global_shift(&self) -> f64 {
        self.global_shift
    }

    fn with_exponent(&self, exponent: Param) -> Self {
        Self {
            exponent,
            global_shift: self.global_shift,
        }
    }
}

impl QuantumGate for ISwapPowGate {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn qubit_count(&self) -> usize {
        2
    }

    fn matrix(&self) -> Result<Array2<Complex64>> {
        self.eigen_unitary()
    }

    fn name(&self) -> String {
        "ISWAP".to_string()
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }

    fn adjoint(&self) -> Result<Box<dyn QuantumGate>> {
        Ok(Box::new(self.inverse()))
    }
}

impl PartialEq for ISwapPowGate {
    fn eq(&self, other: &Self) -> bool {
        self.global_shift == other.global_shift
            && self.canonical_exponent() == other.canonical_exponent()
    }
}

impl fmt::Display for ISwapPowGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_power(f, "ISWAP", &self.exponent)
    }
}
