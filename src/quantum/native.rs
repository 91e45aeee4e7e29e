// src/quantum/native.rs
//! Native two-qubit interaction gates
//!
//! Both gates are parameterized by a group parameter `p` in units of
//! half turns of the interaction Hamiltonian:
//!
//! ```text
//! Ising(p) = exp(-i · Z⊗Z · π/2 · p),          p ∈ [0, 4)
//! XY(p)    = exp(-i · (X⊗X + Y⊗Y) · π/2 · p),  p ∈ [0, 2)
//! ```
//!
//! `p` is not range checked; values outside the conventional interval give
//! the periodic continuation of the family.

use tracing::trace;

use super::param::Param;
use super::pow_gates::{ISwapPowGate, ZZPowGate};

/// Global shift that turns `ZZ**p` into `exp(-iπp/2 · Z⊗Z)`
pub const ISING_GLOBAL_SHIFT: f64 = -0.5;

/// Factor between the XY group parameter and the iSWAP exponent
pub const XY_EXPONENT_FACTOR: f64 = -2.0;

/// Period of [`ising_gate`] in `p`
pub const ISING_PERIOD: f64 = 4.0;

/// Period of [`xy_gate`] in `p`
pub const XY_PERIOD: f64 = 2.0;

/// Rotation around the ZZ axis of the two-qubit Hilbert space.
///
/// Generated by the Ising Hamiltonian `H = Z ⊗ Z`.
///
/// # Examples
///
/// ```
/// use qpow::quantum::{ising_gate, EigenGate, Param};
///
/// let gate = ising_gate(1.0);
/// assert_eq!(gate.exponent(), &Param::Float(1.0));
/// assert_eq!(gate.global_shift(), -0.5);
/// ```
pub fn ising_gate(p: impl Into<Param>) -> ZZPowGate {
    let p = p.into();
    trace!(%p, "constructing Ising gate");
    ZZPowGate::with_global_shift(p, ISING_GLOBAL_SHIFT)
}

/// Rotation around the XX+YY axis of the two-qubit Hilbert space.
///
/// Generated by the Hamiltonian `H = X ⊗ X + Y ⊗ Y`.
///
/// # Examples
///
/// ```
/// use qpow::quantum::{xy_gate, EigenGate, Param};
///
/// let gate = xy_gate(Param::symbol("p"));
/// assert_eq!(gate.exponent().to_string(), "-2*p");
/// assert_eq!(gate.global_shift(), 0.0);
/// ```
pub fn xy_gate(p: impl Into<Param>) -> ISwapPowGate {
    let p = p.into();
    trace!(%p, "constructing XY gate");
    ISwapPowGate::with_global_shift(XY_EXPONENT_FACTOR * p, 0.0)
}
