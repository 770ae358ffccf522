//! Direct concept walk over circuit models.

use quartet_ir::{CircuitModel, Concept, ConceptParams, ConceptSet, DetectedConcept, GateKind};
use tracing::debug;

/// Walk a circuit model's operations; each recognized gate kind maps
/// directly to a concept. Confidence is 1.0: the source is structural, not
/// textual.
pub fn extract_circuit(model: &CircuitModel) -> ConceptSet {
    let mut set = ConceptSet::new();
    set.set_declared_qubits(model.qubits());

    for op in model.ops_in_time_order() {
        match op.kind {
            GateKind::H => {
                set.insert(
                    DetectedConcept::new(Concept::Superposition, 1.0).with_params(ConceptParams {
                        qubit: Some(op.qubit),
                        ..Default::default()
                    }),
                );
            }
            GateKind::Cx | GateKind::Cz | GateKind::Swap => {
                set.insert(
                    DetectedConcept::new(Concept::Entanglement, 1.0).with_params(ConceptParams {
                        qubit: Some(op.qubit),
                        target: op.target,
                        angle: None,
                    }),
                );
            }
            GateKind::Rx(angle) | GateKind::Ry(angle) | GateKind::Rz(angle) => {
                set.insert(
                    DetectedConcept::new(Concept::Rotation, 1.0).with_params(ConceptParams {
                        qubit: Some(op.qubit),
                        target: None,
                        angle: Some(angle),
                    }),
                );
            }
            GateKind::Measure => {
                set.insert(
                    DetectedConcept::new(Concept::Measurement, 1.0).with_params(ConceptParams {
                        qubit: Some(op.qubit),
                        ..Default::default()
                    }),
                );
            }
            GateKind::X | GateKind::Y | GateKind::Z | GateKind::S | GateKind::T => {
                debug!(gate = op.kind.name(), "gate has no concept mapping");
            }
        }
    }

    set
}
