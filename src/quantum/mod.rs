// src/quantum/mod.rs
//! Parameterized two-qubit gates
//!
//! This module implements the gate algebra (parameters, eigen-decomposed
//! power gates, Hamiltonians) and the native Ising and XY gates built on it.

pub mod param;
pub mod gate;
pub mod eigen;
pub mod pow_gates;
pub mod hamiltonian;
pub mod native;
pub mod sweep;

pub use param::{Param, ParamResolver};
pub use gate::{QuantumGate, StandardGate, CustomMatrixGate, TensorProductGate, DEFAULT_ATOL};
pub use eigen::{EigenComponent, EigenGate};
pub use pow_gates::{ZZPowGate, ISwapPowGate};
pub use hamiltonian::{ising_hamiltonian, xy_hamiltonian, expm, evolve};
pub use native::{ising_gate, xy_gate};
pub use sweep::{Sweep, resolve_sweep, unitaries_over_sweep};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{Param, ParamResolver};
    pub use super::{QuantumGate, EigenGate};
    pub use super::{ZZPowGate, ISwapPowGate};
    pub use super::{ising_gate, xy_gate};
    pub use super::Sweep;
}
