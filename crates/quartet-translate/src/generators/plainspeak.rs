//! Plain-language generation with audience-specific phrasing.

use quartet_ir::{Audience, Concept, ConceptSet, Payload, RepKind};

use crate::context::Context;
use crate::error::TranslateResult;
use crate::generator::Generator;

/// Renders one sentence per concept, ordered pedagogically, phrased for the
/// context's audience. Audiences without a dedicated phrasing for a concept
/// fall back to the technical one.
pub struct PlainspeakGenerator;

fn phrase(concept: Concept, audience: Audience) -> Option<&'static str> {
    use Audience::{Client, Executive, Stakeholder, Technical};

    Some(match (concept, audience) {
        (Concept::Superposition, Executive) => {
            "The system holds every candidate answer in superposition at once, so a single pass explores the whole option space."
        }
        (Concept::Superposition, Technical) => {
            "A Hadamard gate puts the qubit into an equal superposition of |0⟩ and |1⟩."
        }
        (Concept::Superposition, Stakeholder) => {
            "The qubits are prepared in superposition, covering all possibilities before we commit to one."
        }
        (Concept::Superposition, Client) => {
            "Your workload starts in superposition, evaluating every path simultaneously."
        }
        (Concept::Entanglement, Executive) => {
            "Entanglement links the qubits so their answers move together, like perfectly synchronized positions."
        }
        (Concept::Entanglement, Technical) => {
            "A CNOT entangles the control and target qubits into a bell state."
        }
        (Concept::Entanglement, Stakeholder) => {
            "The qubits are entangled, so progress on one is progress on its partner."
        }
        (Concept::Entanglement, Client) => {
            "Entangled qubits keep your results internally consistent across the register."
        }
        (Concept::Rotation, Executive) => {
            "A rotation steers the odds toward the outcomes that matter."
        }
        (Concept::Rotation, Technical) => {
            "A parameterized rotation turns the qubit's state vector by the given angle."
        }
        (Concept::Rotation, Stakeholder) => {
            "We rotate the qubit state to weight the promising outcomes more heavily."
        }
        (Concept::Rotation, Client) => {
            "A rotation tunes how strongly each outcome is favored before readout."
        }
        (Concept::Measurement, Executive) => {
            "Measurement collapses the exploration into one concrete, reportable answer."
        }
        (Concept::Measurement, Technical) => {
            "Measurement collapses each qubit to a classical bit, sampling the outcome distribution."
        }
        (Concept::Measurement, Stakeholder) => {
            "Measuring the register converts the quantum state into a result we can act on."
        }
        (Concept::Measurement, Client) => {
            "The final measurement delivers a definite answer you can take downstream."
        }
        (Concept::QuantumSearch, Executive) => {
            "Grover-style quantum search finds the needle without reading the whole haystack."
        }
        (Concept::QuantumSearch, Technical) => {
            "Grover amplitude amplification boosts the marked state across repeated quantum search iterations."
        }
        (Concept::PortfolioOptimization, Executive) => {
            "The circuit encodes portfolio optimization, weighing risk and return across every allocation at once."
        }
        (Concept::PortfolioOptimization, Technical) => {
            "The ansatz encodes a portfolio optimization cost function over the asset register."
        }
        _ => return None,
    })
}

const EMPTY_TEMPLATE: &str =
    "Describe a quantum operation to begin. For example: create superposition, entangle two qubits, or measure the register.";

impl Generator for PlainspeakGenerator {
    fn target(&self) -> RepKind {
        RepKind::Plainspeak
    }

    fn generate(
        &self,
        concepts: &ConceptSet,
        _source: &Payload,
        ctx: &Context,
    ) -> TranslateResult<Payload> {
        if concepts.is_empty() {
            return Ok(Payload::text(EMPTY_TEMPLATE));
        }

        let mut sentences: Vec<String> = Vec::with_capacity(concepts.len());
        for detected in concepts.ranked() {
            let text = phrase(detected.concept, ctx.audience)
                .or_else(|| phrase(detected.concept, Audience::Technical))
                .map(String::from)
                .unwrap_or_else(|| format!("This step involves {}.", detected.concept.name()));
            sentences.push(text);
        }

        Ok(Payload::text(sentences.join(" ")))
    }
}
