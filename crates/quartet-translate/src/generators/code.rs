//! Pseudo-Qiskit code generation.

use quartet_ir::{Angle, Concept, ConceptSet, Payload, RepKind};

use crate::context::Context;
use crate::error::TranslateResult;
use crate::generator::Generator;
use crate::generators::{entangling_pair, required_qubits};

/// Emits a runnable Python block: imports, a sized circuit construction,
/// then one statement per concept-implied operation in pedagogical order.
pub struct CodeGenerator;

impl Generator for CodeGenerator {
    fn target(&self) -> RepKind {
        RepKind::Code
    }

    fn generate(
        &self,
        concepts: &ConceptSet,
        _source: &Payload,
        _ctx: &Context,
    ) -> TranslateResult<Payload> {
        let qubits = required_qubits(concepts);
        let needs_pi = concepts.contains(Concept::Rotation);

        let mut lines: Vec<String> = Vec::new();
        lines.push("from qiskit import QuantumCircuit".to_string());
        if needs_pi {
            lines.push("from math import pi".to_string());
        }
        lines.push(String::new());
        lines.push(format!("qc = QuantumCircuit({qubits})"));

        if concepts.is_empty() {
            lines.push("# empty circuit: add gates to begin".to_string());
            return Ok(Payload::text(lines.join("\n")));
        }

        for detected in concepts.ranked() {
            match detected.concept {
                Concept::Superposition => {
                    let qubit = detected.params.qubit.unwrap_or(0);
                    lines.push(format!("qc.h({qubit})"));
                }
                Concept::Entanglement => {
                    let (control, target) =
                        entangling_pair(detected.params.qubit, detected.params.target);
                    lines.push(format!("qc.cx({control}, {target})"));
                }
                Concept::Rotation => {
                    let qubit = detected.params.qubit.unwrap_or(0);
                    let angle = detected.params.angle.unwrap_or(Angle::half_pi());
                    lines.push(format!("qc.ry({angle}, {qubit})"));
                }
                Concept::Measurement => {
                    lines.push("qc.measure_all()".to_string());
                }
                Concept::QuantumSearch => {
                    lines.push("# Grover iterations would be appended here".to_string());
                }
                Concept::PortfolioOptimization => {
                    lines.push("# portfolio cost ansatz would be appended here".to_string());
                }
                other => {
                    lines.push(format!("# no code emission for concept: {}", other.name()));
                }
            }
        }

        Ok(Payload::text(lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::{ConceptParams, DetectedConcept};

    fn generate(set: &ConceptSet) -> String {
        CodeGenerator
            .generate(set, &Payload::text(""), &Context::new())
            .unwrap()
            .as_text()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_empty_set_emits_preamble_only() {
        let code = generate(&ConceptSet::new());
        assert!(code.starts_with("from qiskit import QuantumCircuit"));
        assert!(code.contains("qc = QuantumCircuit(2)"));
        assert!(!code.contains("qc.h"));
    }

    #[test]
    fn test_superposition_then_measurement_order() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Measurement, 0.9));
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));

        let code = generate(&set);
        let h = code.find("qc.h(0)").unwrap();
        let m = code.find("qc.measure_all()").unwrap();
        assert!(h < m);
    }

    #[test]
    fn test_explicit_params_respected() {
        let mut set = ConceptSet::new();
        set.insert(
            DetectedConcept::new(Concept::Entanglement, 0.9).with_params(ConceptParams {
                qubit: Some(1),
                target: Some(2),
                angle: None,
            }),
        );

        let code = generate(&set);
        assert!(code.contains("qc = QuantumCircuit(3)"));
        assert!(code.contains("qc.cx(1, 2)"));
    }

    #[test]
    fn test_rotation_default_angle_and_import() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Rotation, 0.9));

        let code = generate(&set);
        assert!(code.contains("from math import pi"));
        assert!(code.contains("qc.ry(pi / 2, 0)"));
    }

    #[test]
    fn test_rotation_explicit_angle_round_trips_verbatim() {
        let mut set = ConceptSet::new();
        set.insert(
            DetectedConcept::new(Concept::Rotation, 0.9).with_params(ConceptParams {
                qubit: Some(1),
                target: None,
                angle: Some(Angle::PiRational(2, 3)),
            }),
        );

        let code = generate(&set);
        assert!(code.contains("qc.ry(2 * pi / 3, 1)"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));
        set.insert(DetectedConcept::new(Concept::Entanglement, 0.9));

        assert_eq!(generate(&set), generate(&set));
    }
}
