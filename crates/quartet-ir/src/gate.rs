//! Gate kinds for the circuit representation.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;

/// The kinds of operation a circuit model can hold.
///
/// Rotation gates carry their angle; everything else is parameter-free.
/// Measurement is modeled as a per-qubit operation like the gates, which
/// keeps the operation sequence a single ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Rotation around X axis.
    Rx(Angle),
    /// Rotation around Y axis.
    Ry(Angle),
    /// Rotation around Z axis.
    Rz(Angle),
    /// Controlled-X (CNOT) gate.
    Cx,
    /// Controlled-Z gate.
    Cz,
    /// SWAP gate.
    Swap,
    /// Measurement in the computational basis.
    Measure,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
            GateKind::Cx => "cx",
            GateKind::Cz => "cz",
            GateKind::Swap => "swap",
            GateKind::Measure => "measure",
        }
    }

    /// Get the number of qubits this operation addresses.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Cx | GateKind::Cz | GateKind::Swap => 2,
            _ => 1,
        }
    }

    /// Check if this is a rotation gate.
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateKind::Rx(_) | GateKind::Ry(_) | GateKind::Rz(_))
    }

    /// Get the rotation angle, if this is a rotation gate.
    pub fn angle(&self) -> Option<Angle> {
        match self {
            GateKind::Rx(a) | GateKind::Ry(a) | GateKind::Rz(a) => Some(*a),
            _ => None,
        }
    }
}
