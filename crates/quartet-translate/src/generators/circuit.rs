//! Circuit model generation.

use quartet_ir::{Angle, CircuitModel, Concept, ConceptSet, Payload, RepKind};
use tracing::debug;

use crate::context::Context;
use crate::error::{TranslateError, TranslateResult};
use crate::generator::Generator;
use crate::generators::{entangling_pair, required_qubits};

/// Builds a circuit by mapping each concept to its canonical operation,
/// assigning monotonically increasing time slots in pedagogical order.
/// Domain concepts have no gate realization and are skipped.
pub struct CircuitGenerator;

impl CircuitGenerator {
    fn gen_error(e: quartet_ir::ModelError) -> TranslateError {
        TranslateError::Generation {
            target: RepKind::Circuit,
            reason: e.to_string(),
        }
    }
}

impl Generator for CircuitGenerator {
    fn target(&self) -> RepKind {
        RepKind::Circuit
    }

    fn generate(
        &self,
        concepts: &ConceptSet,
        _source: &Payload,
        _ctx: &Context,
    ) -> TranslateResult<Payload> {
        let qubits = required_qubits(concepts);
        let mut model = CircuitModel::new(qubits);

        for detected in concepts.ranked() {
            match detected.concept {
                Concept::Superposition => {
                    let qubit = detected.params.qubit.unwrap_or(0);
                    model.h(qubit).map_err(Self::gen_error)?;
                }
                Concept::Entanglement => {
                    let (control, target) =
                        entangling_pair(detected.params.qubit, detected.params.target);
                    model.cx(control, target).map_err(Self::gen_error)?;
                }
                Concept::Rotation => {
                    let qubit = detected.params.qubit.unwrap_or(0);
                    let angle = detected.params.angle.unwrap_or(Angle::half_pi());
                    model.ry(angle, qubit).map_err(Self::gen_error)?;
                }
                Concept::Measurement => {
                    model.measure_all().map_err(Self::gen_error)?;
                }
                other => {
                    debug!(concept = other.name(), "no canonical circuit realization");
                }
            }
        }

        Ok(Payload::Circuit(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::{ConceptParams, DetectedConcept, GateKind};

    fn generate(set: &ConceptSet) -> CircuitModel {
        let payload = CircuitGenerator
            .generate(set, &Payload::text(""), &Context::new())
            .unwrap();
        payload.as_circuit().unwrap().clone()
    }

    #[test]
    fn test_empty_set_yields_empty_circuit() {
        let model = generate(&ConceptSet::new());
        assert_eq!(model.qubits(), 2);
        assert!(model.is_empty());
    }

    #[test]
    fn test_canonical_operations_and_times() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Measurement, 0.9));
        set.insert(DetectedConcept::new(Concept::Entanglement, 0.9));
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));

        let model = generate(&set);
        let ops = model.ops_in_time_order();

        assert_eq!(ops[0].kind, GateKind::H);
        assert_eq!(ops[0].qubit, 0);
        assert_eq!(ops[1].kind, GateKind::Cx);
        assert_eq!(ops[1].target, Some(1));
        assert!(matches!(ops[2].kind, GateKind::Measure));
        assert!(ops[0].time < ops[1].time && ops[1].time < ops[2].time);
    }

    #[test]
    fn test_rotation_defaults_to_ry_half_pi() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Rotation, 0.9));

        let model = generate(&set);
        assert_eq!(model.operations()[0].kind, GateKind::Ry(Angle::half_pi()));
    }

    #[test]
    fn test_explicit_qubit_widens_register() {
        let mut set = ConceptSet::new();
        set.insert(
            DetectedConcept::new(Concept::Superposition, 0.9).with_params(ConceptParams {
                qubit: Some(4),
                ..Default::default()
            }),
        );

        let model = generate(&set);
        assert_eq!(model.qubits(), 5);
        assert_eq!(model.operations()[0].qubit, 4);
    }

    #[test]
    fn test_domain_concepts_are_skipped() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::QuantumSearch, 0.9));

        let model = generate(&set);
        assert!(model.is_empty());
    }
}
