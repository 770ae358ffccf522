//! Error types for the model crate.

use thiserror::Error;

/// Errors raised when an operation would violate a circuit invariant.
///
/// Construction fails instead of producing a corrupt
/// [`CircuitModel`](crate::CircuitModel); the model is unchanged after any
/// error.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Qubit index outside the circuit's register.
    #[error("qubit {qubit} out of range for {num_qubits}-qubit circuit (gate: {gate})")]
    QubitOutOfRange {
        /// Name of the gate being applied.
        gate: &'static str,
        /// The offending qubit index.
        qubit: u32,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Two-qubit gate addressed to a single wire.
    #[error("target qubit equals control qubit {qubit} (gate: {gate})")]
    TargetEqualsControl {
        /// Name of the gate being applied.
        gate: &'static str,
        /// The index used for both control and target.
        qubit: u32,
    },

    /// Two-qubit gate applied without a target.
    #[error("gate '{gate}' requires a target qubit")]
    MissingTarget {
        /// Name of the gate being applied.
        gate: &'static str,
    },

    /// Single-qubit gate applied with a target.
    #[error("gate '{gate}' does not take a target qubit")]
    UnexpectedTarget {
        /// Name of the gate being applied.
        gate: &'static str,
    },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
