// src/quantum/gate.rs
//! Quantum gates
//!
//! The [`QuantumGate`] trait is the common surface every gate in the crate
//! exposes: a qubit count, a name and a unitary matrix. Fixed gates
//! (Paulis, identities) and the structural gates used to build generators
//! (tensor products, explicit matrices) live here too.

use std::any::Any;
use std::fmt::Debug;

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

use crate::error::{GateError, Result};

/// Default absolute tolerance for matrix comparisons
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
}

/// Trait for quantum gates
pub trait QuantumGate: Debug + Any + Send + Sync {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns the matrix representation of this gate.
    ///
    /// Fails for gates whose parameters are still symbolic.
    fn matrix(&self) -> Result<Array2<Complex64>>;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    /// Create a clone of this gate
    fn clone_box(&self) -> Box<dyn QuantumGate>;

    /// Convert to Any for runtime type checking
    fn as_any(&self) -> &dyn Any;

    /// Returns the adjoint (Hermitian conjugate) of this gate
    fn adjoint(&self) -> Result<Box<dyn QuantumGate>> {
        let matrix = self.matrix()?;
        Ok(Box::new(CustomMatrixGate {
            matrix: conjugate_transpose(&matrix),
            name: format!("{}†", self.name()),
            qubits: self.qubit_count(),
        }))
    }

    /// Compares this gate with another gate by their matrices
    fn equals(&self, other: &dyn QuantumGate) -> bool {
        match (self.matrix(), other.matrix()) {
            (Ok(m1), Ok(m2)) => matrices_approx_eq(&m1, &m2, DEFAULT_ATOL),
            _ => false,
        }
    }
}

impl Clone for Box<dyn QuantumGate> {
    fn clone(&self) -> Box<dyn QuantumGate> {
        self.clone_box()
    }
}

/// A generic gate defined by its matrix
#[derive(Debug, Clone)]
pub struct CustomMatrixGate {
    pub matrix: Array2<Complex64>,
    pub name: String,
    pub qubits: usize,
}

impl CustomMatrixGate {
    /// Wrap a square matrix of dimension `2^n` as an `n`-qubit gate
    pub fn new(name: impl Into<String>, matrix: Array2<Complex64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols || !rows.is_power_of_two() {
            return Err(GateError::dimension_mismatch(
                "square matrix with power-of-two dimension",
                format!("{}x{}", rows, cols),
            ));
        }
        Ok(Self {
            matrix,
            name: name.into(),
            qubits: rows.trailing_zeros() as usize,
        })
    }
}

impl QuantumGate for CustomMatrixGate {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn qubit_count(&self) -> usize {
        self.qubits
    }

    fn matrix(&self) -> Result<Array2<Complex64>> {
        Ok(self.matrix.clone())
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }
}

/// Fixed gates used as building blocks for interaction generators
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandardGate {
    /// Identity gate
    I(usize), // number of qubits

    /// Pauli-X gate
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,
}

impl QuantumGate for StandardGate {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn qubit_count(&self) -> usize {
        match self {
            StandardGate::I(n) => *n,
            StandardGate::X | StandardGate::Y | StandardGate::Z => 1,
        }
    }

    fn matrix(&self) -> Result<Array2<Complex64>> {
        use constants::*;
        let matrix = match self {
            StandardGate::I(n) => identity(1 << n),
            StandardGate::X => array![[ZERO, ONE], [ONE, ZERO]],
            StandardGate::Y => array![[ZERO, -I], [I, ZERO]],
            StandardGate::Z => array![[ONE, ZERO], [ZERO, -ONE]],
        };
        Ok(matrix)
    }

    fn name(&self) -> String {
        match self {
            StandardGate::I(n) => format!("I({})", n),
            StandardGate::X => "X".to_string(),
            StandardGate::Y => "Y".to_string(),
            StandardGate::Z => "Z".to_string(),
        }
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }

    fn adjoint(&self) -> Result<Box<dyn QuantumGate>> {
        // All of these are Hermitian
        Ok(self.clone_box())
    }
}

/// Tensor product of two gates, `gate1` on the leading qubits
#[derive(Debug)]
pub struct TensorProductGate {
    pub gate1: Box<dyn QuantumGate>,
    pub gate2: Box<dyn QuantumGate>,
}

impl TensorProductGate {
    pub fn new(gate1: impl QuantumGate, gate2: impl QuantumGate) -> Self {
        Self {
            gate1: Box::new(gate1),
            gate2: Box::new(gate2),
        }
    }
}

impl QuantumGate for TensorProductGate {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn qubit_count(&self) -> usize {
        self.gate1.qubit_count() + self.gate2.qubit_count()
    }

    fn matrix(&self) -> Result<Array2<Complex64>> {
        Ok(kron(&self.gate1.matrix()?, &self.gate2.matrix()?))
    }

    fn name(&self) -> String {
        format!("{} ⊗ {}", self.gate1.name(), self.gate2.name())
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(TensorProductGate {
            gate1: self.gate1.clone_box(),
            gate2: self.gate2.clone_box(),
        })
    }

    fn adjoint(&self) -> Result<Box<dyn QuantumGate>> {
        // The adjoint of a tensor product is the tensor product of adjoints
        Ok(Box::new(TensorProductGate {
            gate1: self.gate1.adjoint()?,
            gate2: self.gate2.adjoint()?,
        }))
    }
}

/// `dim × dim` identity matrix
pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::from_diag(&Array1::from_elem(dim, constants::ONE))
}

/// Kronecker product of two matrices
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (n1, m1) = a.dim();
    let (n2, m2) = b.dim();
    let mut result = Array2::zeros((n1 * n2, m1 * m2));

    for i in 0..n1 {
        for j in 0..m1 {
            for k in 0..n2 {
                for l in 0..m2 {
                    result[[i * n2 + k, j * m2 + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}

pub fn conjugate_transpose(matrix: &Array2<Complex64>) -> Array2<Complex64> {
    matrix.t().mapv(|z| z.conj())
}

/// Element-wise comparison within `atol`
pub fn matrices_approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, atol: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= atol)
}

/// Whether `a = e^{iφ} b` for some global phase `φ`, within `atol`
pub fn allclose_up_to_global_phase(a: &Array2<Complex64>, b: &Array2<Complex64>, atol: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    // Take the phase from the largest entry of b to keep the division stable
    let pivot = b
        .iter()
        .enumerate()
        .max_by(|(_, x), (_, y)| x.norm().total_cmp(&y.norm()))
        .map(|(idx, _)| idx);
    let Some(idx) = pivot else {
        return true;
    };
    let (a_pivot, b_pivot) = (a.iter().nth(idx), b.iter().nth(idx));
    let (Some(a_pivot), Some(b_pivot)) = (a_pivot, b_pivot) else {
        return false;
    };
    if b_pivot.norm() <= atol {
        return matrices_approx_eq(a, b, atol);
    }
    let ratio = a_pivot / b_pivot;
    let phase = ratio / ratio.norm();
    if !phase.re.is_finite() || !phase.im.is_finite() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - phase * y).norm() <= atol)
}
