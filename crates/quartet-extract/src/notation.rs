//! Symbol-table matching for LaTeX/unicode notation.

use quartet_ir::{Concept, ConceptSet, DetectedConcept};

/// Fragment → concept table. Matching is case-sensitive substring search:
/// LaTeX command casing is significant. Both LaTeX and unicode spellings are
/// listed where the demo UIs emit either.
const SYMBOLS: &[(&str, Concept, f64)] = &[
    // Superposition
    ("|0\\rangle + |1\\rangle", Concept::Superposition, 0.95),
    ("|0⟩ + |1⟩", Concept::Superposition, 0.95),
    ("|+\\rangle", Concept::Superposition, 0.85),
    ("|+⟩", Concept::Superposition, 0.85),
    ("H|0", Concept::Superposition, 0.8),
    ("\\frac{1}{\\sqrt{2}}", Concept::Superposition, 0.5),
    ("1/√2", Concept::Superposition, 0.5),
    // Entanglement
    ("|00\\rangle + |11\\rangle", Concept::Entanglement, 0.95),
    ("|00⟩ + |11⟩", Concept::Entanglement, 0.95),
    ("\\Phi^+", Concept::Entanglement, 0.85),
    ("Φ⁺", Concept::Entanglement, 0.85),
    ("CNOT", Concept::Entanglement, 0.85),
    ("\\otimes", Concept::Entanglement, 0.6),
    ("⊗", Concept::Entanglement, 0.6),
    // Rotation
    ("R_x(", Concept::Rotation, 0.9),
    ("R_y(", Concept::Rotation, 0.9),
    ("R_z(", Concept::Rotation, 0.9),
    ("\\theta", Concept::Rotation, 0.5),
    ("θ", Concept::Rotation, 0.5),
    // Measurement (Born-rule shapes)
    ("\\rangle|^2", Concept::Measurement, 0.9),
    ("⟩|²", Concept::Measurement, 0.9),
    ("\\text{measure", Concept::Measurement, 0.7),
    // Domain: quantum search
    ("G^{k}", Concept::QuantumSearch, 0.85),
    ("Grover", Concept::QuantumSearch, 0.9),
    // Domain: portfolio optimization
    ("x^{T}\\Sigma x", Concept::PortfolioOptimization, 0.9),
    ("\\min_{x}", Concept::PortfolioOptimization, 0.6),
];

/// Match notation content against the symbol table.
pub fn extract_notation(text: &str) -> ConceptSet {
    let mut set = ConceptSet::new();

    for &(fragment, concept, confidence) in SYMBOLS {
        if text.contains(fragment) {
            set.insert(DetectedConcept::new(concept, confidence));
        }
    }

    set
}
