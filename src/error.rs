//! Error types for qpow

use thiserror::Error;

/// Errors raised by the gate algebra.
///
/// The gate factories themselves never fail; these come from binding
/// parameters and materializing matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    /// A symbol had no binding when a concrete value was required
    #[error("Unresolved parameter '{0}'")]
    UnresolvedParameter(String),

    /// A numeric unitary was requested from a gate with a symbolic exponent
    #[error("Gate '{gate}' is parameterized by {parameters:?} and has no numeric unitary")]
    ParameterizedGate {
        gate: String,
        parameters: Vec<String>,
    },

    /// Matrix shape did not match what the operation needs
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
}

impl GateError {
    pub fn parameterized(gate: impl Into<String>, parameters: impl IntoIterator<Item = String>) -> Self {
        Self::ParameterizedGate {
            gate: gate.into(),
            parameters: parameters.into_iter().collect(),
        }
    }

    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GateError>;
