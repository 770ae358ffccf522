//! Validated circuit model with a fluent builder API.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::error::{ModelError, ModelResult};
use crate::gate::GateKind;

/// A single placed operation.
///
/// `time` defines execution order, ties broken by insertion order. `target`
/// is present exactly for two-qubit gates; the constructors on
/// [`CircuitModel`] enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// What the operation does.
    pub kind: GateKind,
    /// The qubit it acts on (the control, for two-qubit gates).
    pub qubit: u32,
    /// Target qubit for two-qubit gates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Execution time slot.
    pub time: u32,
    /// Model-unique identifier, stable across clones.
    pub id: String,
}

/// A quantum circuit as an ordered sequence of validated operations.
///
/// Every mutation goes through checked methods; a rejected operation leaves
/// the model untouched. Values are cheap to clone and handed to callers by
/// value, never by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitModel {
    qubits: u32,
    operations: Vec<Operation>,
    next_time: u32,
    next_id: u32,
}

impl CircuitModel {
    /// Create an empty circuit. A circuit has at least one qubit.
    pub fn new(qubits: u32) -> Self {
        Self {
            qubits: qubits.max(1),
            operations: vec![],
            next_time: 0,
            next_id: 0,
        }
    }

    /// Validate and append an operation at an explicit time slot.
    fn push(&mut self, kind: GateKind, qubit: u32, target: Option<u32>, time: u32) -> ModelResult<()> {
        if kind.num_qubits() == 2 {
            let Some(t) = target else {
                return Err(ModelError::MissingTarget { gate: kind.name() });
            };
            if t == qubit {
                return Err(ModelError::TargetEqualsControl {
                    gate: kind.name(),
                    qubit,
                });
            }
            if t >= self.qubits {
                return Err(ModelError::QubitOutOfRange {
                    gate: kind.name(),
                    qubit: t,
                    num_qubits: self.qubits,
                });
            }
        } else if target.is_some() {
            return Err(ModelError::UnexpectedTarget { gate: kind.name() });
        }

        if qubit >= self.qubits {
            return Err(ModelError::QubitOutOfRange {
                gate: kind.name(),
                qubit,
                num_qubits: self.qubits,
            });
        }

        let id = format!("op{}", self.next_id);
        self.next_id += 1;
        self.operations.push(Operation {
            kind,
            qubit,
            target,
            time,
            id,
        });
        Ok(())
    }

    fn push_auto(&mut self, kind: GateKind, qubit: u32, target: Option<u32>) -> ModelResult<&mut Self> {
        let time = self.next_time;
        self.push(kind, qubit, target, time)?;
        self.next_time += 1;
        Ok(self)
    }

    /// Append an operation at an explicit time slot, advancing the internal
    /// clock past it.
    pub fn apply_at(
        &mut self,
        kind: GateKind,
        qubit: u32,
        target: Option<u32>,
        time: u32,
    ) -> ModelResult<&mut Self> {
        self.push(kind, qubit, target, time)?;
        self.next_time = self.next_time.max(time + 1);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::H, qubit, None)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::X, qubit, None)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Y, qubit, None)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Z, qubit, None)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::S, qubit, None)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::T, qubit, None)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, angle: Angle, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Rx(angle), qubit, None)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, angle: Angle, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Ry(angle), qubit, None)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, angle: Angle, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Rz(angle), qubit, None)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: u32, target: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Cx, control, Some(target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: u32, target: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Cz, control, Some(target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: u32, q2: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Swap, q1, Some(q2))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a single qubit.
    pub fn measure(&mut self, qubit: u32) -> ModelResult<&mut Self> {
        self.push_auto(GateKind::Measure, qubit, None)
    }

    /// Measure all qubits in one time slot.
    pub fn measure_all(&mut self) -> ModelResult<&mut Self> {
        let time = self.next_time;
        for q in 0..self.qubits {
            self.push(GateKind::Measure, q, None, time)?;
        }
        self.next_time += 1;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the number of qubits.
    pub fn qubits(&self) -> u32 {
        self.qubits
    }

    /// Get the operations in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Check whether any measurement is present.
    pub fn has_measurement(&self) -> bool {
        self.operations
            .iter()
            .any(|op| matches!(op.kind, GateKind::Measure))
    }

    /// Get the operations sorted by time slot, ties in insertion order.
    pub fn ops_in_time_order(&self) -> Vec<&Operation> {
        let mut ops: Vec<&Operation> = self.operations.iter().collect();
        ops.sort_by_key(|op| op.time);
        ops
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> ModelResult<Self> {
        let mut circuit = Self::new(2);
        circuit.h(0)?.cx(0, 1)?.measure_all()?;
        Ok(circuit)
    }
}

impl Default for CircuitModel {
    fn default() -> Self {
        Self::new(1)
    }
}
