//! LaTeX notation generation.

use quartet_ir::{Concept, ConceptSet, DetectedConcept, Payload, RepKind};

use crate::context::Context;
use crate::error::TranslateResult;
use crate::generator::Generator;

/// Emits one LaTeX line per concept from a fixed template table, joined
/// with line breaks. Unknown concepts degrade to `\text{<name>}`.
pub struct NotationGenerator;

fn line(detected: &DetectedConcept) -> String {
    match detected.concept {
        Concept::Superposition => {
            "|\\psi\\rangle = \\frac{1}{\\sqrt{2}}(|0\\rangle + |1\\rangle)".to_string()
        }
        Concept::Entanglement => {
            "|\\Phi^+\\rangle = \\frac{1}{\\sqrt{2}}(|00\\rangle + |11\\rangle)".to_string()
        }
        Concept::Rotation => match detected.params.angle {
            Some(angle) => format!(
                "R_y(\\theta)|0\\rangle = \\cos(\\tfrac{{\\theta}}{{2}})|0\\rangle + \\sin(\\tfrac{{\\theta}}{{2}})|1\\rangle,\\quad \\theta = {}",
                angle.to_latex()
            ),
            None => {
                "R_y(\\theta)|0\\rangle = \\cos(\\tfrac{\\theta}{2})|0\\rangle + \\sin(\\tfrac{\\theta}{2})|1\\rangle"
                    .to_string()
            }
        },
        Concept::Measurement => "P(x) = |\\langle x|\\psi\\rangle|^2".to_string(),
        Concept::QuantumSearch => {
            "|\\psi_k\\rangle = G^{k}|s\\rangle,\\quad G = (2|\\psi\\rangle\\langle\\psi| - I)O"
                .to_string()
        }
        Concept::PortfolioOptimization => "\\min_{x}\\; x^{T}\\Sigma x - \\mu^{T}x".to_string(),
        other => format!("\\text{{{}}}", other.name()),
    }
}

impl Generator for NotationGenerator {
    fn target(&self) -> RepKind {
        RepKind::Notation
    }

    fn generate(
        &self,
        concepts: &ConceptSet,
        _source: &Payload,
        _ctx: &Context,
    ) -> TranslateResult<Payload> {
        if concepts.is_empty() {
            let qubits = concepts.qubits_or_default();
            return Ok(Payload::text(format!("|0\\rangle^{{\\otimes {qubits}}}")));
        }

        let lines: Vec<String> = concepts.ranked().into_iter().map(line).collect();
        Ok(Payload::text(lines.join("\n")))
    }
}
