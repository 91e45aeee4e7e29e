//! Parameterized two-qubit interaction gates
//!
//! This crate provides the native Ising (Z⊗Z) and XY (X⊗X + Y⊗Y) interaction
//! gates as members of eigen-decomposed power-gate families, together with
//! the symbolic parameters, Hamiltonians and sweeps needed to bind and check
//! them.

pub mod error;
pub mod quantum;

pub use error::{GateError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{GateError, Result};
    pub use crate::quantum::prelude::*;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
