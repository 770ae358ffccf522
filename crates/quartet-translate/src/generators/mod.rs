//! The four shipped generators.

mod circuit;
mod code;
mod notation;
mod plainspeak;

pub use circuit::CircuitGenerator;
pub use code::CodeGenerator;
pub use notation::NotationGenerator;
pub use plainspeak::PlainspeakGenerator;

use quartet_ir::{Concept, ConceptSet};

/// Qubit count a generated circuit or code block needs: the declared count,
/// widened to fit any explicit qubit parameter and the two wires
/// entanglement requires.
pub(crate) fn required_qubits(concepts: &ConceptSet) -> u32 {
    let mut qubits = concepts.qubits_or_default();
    for detected in concepts.iter() {
        if let Some(q) = detected.params.qubit {
            qubits = qubits.max(q + 1);
        }
        if let Some(t) = detected.params.target {
            qubits = qubits.max(t + 1);
        }
        if detected.concept == Concept::Entanglement {
            qubits = qubits.max(2);
        }
    }
    qubits.max(1)
}

/// Default control/target pair for an entanglement concept: explicit
/// parameters win, otherwise (0, 1), keeping control and target distinct.
pub(crate) fn entangling_pair(
    qubit: Option<u32>,
    target: Option<u32>,
) -> (u32, u32) {
    let control = qubit.unwrap_or(0);
    let target = match target {
        Some(t) if t != control => t,
        _ => {
            if control == 0 {
                1
            } else {
                0
            }
        }
    };
    (control, target)
}
