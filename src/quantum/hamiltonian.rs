// src/quantum/hamiltonian.rs
//! Interaction Hamiltonians and their time evolution
//!
//! These give the physics definitions of the native gates directly:
//! `U = exp(-iθH)` for a Hermitian generator `H`.

use ndarray::Array2;
use num_complex::Complex64;

use super::gate::{identity, QuantumGate, StandardGate, TensorProductGate};
use crate::error::{GateError, Result};

/// Taylor terms used after scaling; the scaled norm is at most 1/2
const TAYLOR_TERMS: usize = 18;

fn pauli_pair(a: StandardGate, b: StandardGate) -> Result<Array2<Complex64>> {
    TensorProductGate::new(a, b).matrix()
}

/// `H_Ising = Z ⊗ Z`
pub fn ising_hamiltonian() -> Result<Array2<Complex64>> {
    pauli_pair(StandardGate::Z, StandardGate::Z)
}

/// `H_XY = X ⊗ X + Y ⊗ Y`
pub fn xy_hamiltonian() -> Result<Array2<Complex64>> {
    let xx = pauli_pair(StandardGate::X, StandardGate::X)?;
    let yy = pauli_pair(StandardGate::Y, StandardGate::Y)?;
    Ok(xx + yy)
}

/// Maximum absolute row sum
fn inf_norm(m: &Array2<Complex64>) -> f64 {
    m.rows()
        .into_iter()
        .map(|row| row.iter().map(|z| z.norm()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Matrix exponential by scaling and squaring
pub fn expm(m: &Array2<Complex64>) -> Result<Array2<Complex64>> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(GateError::dimension_mismatch(
            "square matrix",
            format!("{}x{}", rows, cols),
        ));
    }

    let norm = inf_norm(m);
    let squarings = if norm > 0.5 {
        (norm / 0.5).log2().ceil() as i32
    } else {
        0
    };
    let scaled = m.mapv(|z| z / 2f64.powi(squarings));

    let mut result = identity(rows);
    let mut term = identity(rows);
    for k in 1..=TAYLOR_TERMS {
        term = term.dot(&scaled).mapv(|z| z / k as f64);
        result = result + &term;
    }

    for _ in 0..squarings {
        result = result.dot(&result);
    }
    Ok(result)
}

/// `exp(-iθH)`
pub fn evolve(hamiltonian: &Array2<Complex64>, theta: f64) -> Result<Array2<Complex64>> {
    let generator = hamiltonian.mapv(|z| z * Complex64::new(0.0, -theta));
    expm(&generator)
}
