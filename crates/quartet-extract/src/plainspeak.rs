//! Vocabulary matching for plain-language content.

use quartet_ir::{Concept, ConceptSet, DetectedConcept};

/// Phrase → concept table. Inflections are listed explicitly; matching is
/// whole-word over normalized text, so `measurement` does not also fire the
/// `measure` entry.
const VOCABULARY: &[(&str, Concept, f64)] = &[
    // Superposition
    ("superposition", Concept::Superposition, 0.95),
    ("superpositions", Concept::Superposition, 0.95),
    ("hadamard", Concept::Superposition, 0.85),
    ("both states at once", Concept::Superposition, 0.7),
    ("all possibilities", Concept::Superposition, 0.6),
    ("equal mixture", Concept::Superposition, 0.6),
    // Entanglement
    ("entanglement", Concept::Entanglement, 0.95),
    ("entangle", Concept::Entanglement, 0.9),
    ("entangled", Concept::Entanglement, 0.9),
    ("entangles", Concept::Entanglement, 0.9),
    ("bell state", Concept::Entanglement, 0.85),
    ("bell pair", Concept::Entanglement, 0.85),
    ("epr pair", Concept::Entanglement, 0.8),
    ("cnot", Concept::Entanglement, 0.8),
    ("correlated qubits", Concept::Entanglement, 0.7),
    // Rotation
    ("rotation", Concept::Rotation, 0.9),
    ("rotations", Concept::Rotation, 0.9),
    ("rotate", Concept::Rotation, 0.85),
    ("rotates", Concept::Rotation, 0.85),
    ("rotating", Concept::Rotation, 0.85),
    ("phase shift", Concept::Rotation, 0.6),
    // Measurement
    ("measurement", Concept::Measurement, 0.95),
    ("measurements", Concept::Measurement, 0.95),
    ("measure", Concept::Measurement, 0.9),
    ("measures", Concept::Measurement, 0.9),
    ("measured", Concept::Measurement, 0.9),
    ("measuring", Concept::Measurement, 0.9),
    ("readout", Concept::Measurement, 0.8),
    ("collapse", Concept::Measurement, 0.7),
    ("collapses", Concept::Measurement, 0.7),
    ("observe", Concept::Measurement, 0.6),
    // Domain: quantum search
    ("quantum search", Concept::QuantumSearch, 0.95),
    ("grover", Concept::QuantumSearch, 0.9),
    ("amplitude amplification", Concept::QuantumSearch, 0.85),
    ("unstructured search", Concept::QuantumSearch, 0.7),
    ("database search", Concept::QuantumSearch, 0.6),
    // Domain: portfolio optimization
    ("portfolio optimization", Concept::PortfolioOptimization, 0.95),
    ("portfolio", Concept::PortfolioOptimization, 0.8),
    ("asset allocation", Concept::PortfolioOptimization, 0.8),
    ("risk return", Concept::PortfolioOptimization, 0.6),
];

/// Lower-case, strip punctuation to spaces, collapse runs, pad the ends so
/// every phrase match is a whole-word match.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(' ');
    let mut last_space = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_space = false;
        } else if !last_space {
            out.push(' ');
            last_space = true;
        }
    }
    if !last_space {
        out.push(' ');
    }
    out
}

/// Match plain-language content against the vocabulary table.
///
/// Multiple hits for the same concept raise its confidence without
/// duplicating the entry.
pub fn extract_plainspeak(text: &str) -> ConceptSet {
    let normalized = normalize(text);
    let mut set = ConceptSet::new();

    for &(phrase, concept, confidence) in VOCABULARY {
        let needle = format!(" {phrase} ");
        if normalized.contains(&needle) {
            set.insert(DetectedConcept::new(concept, confidence));
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_concept() {
        let set = extract_plainspeak("create superposition");
        assert_eq!(set.len(), 1);
        assert!(set.contains(Concept::Superposition));
    }

    #[test]
    fn test_superposition_and_measurement_sentence() {
        let set = extract_plainspeak("This creates superposition and then measures the qubit");
        let concepts: Vec<Concept> = set.concepts().collect();
        assert!(concepts.contains(&Concept::Superposition));
        assert!(concepts.contains(&Concept::Measurement));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_multiple_hits_raise_confidence() {
        let one = extract_plainspeak("entanglement");
        let two = extract_plainspeak("entanglement via a bell state");
        let c1 = one.get(Concept::Entanglement).unwrap().confidence;
        let c2 = two.get(Concept::Entanglement).unwrap().confidence;
        assert!(c2 > c1);
        assert_eq!(two.len(), 1);
    }

    #[test]
    fn test_word_boundaries() {
        // "measurements" must not fire the bare "measure" entry twice over;
        // it matches its own entry exactly once.
        let set = extract_plainspeak("measurements");
        assert_eq!(set.len(), 1);
        let conf = set.get(Concept::Measurement).unwrap().confidence;
        assert!((conf - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_and_case() {
        let set = extract_plainspeak("Entangled? Yes — a BELL STATE.");
        assert!(set.contains(Concept::Entanglement));
    }

    #[test]
    fn test_domain_concepts() {
        let set = extract_plainspeak("optimize the portfolio with Grover search");
        assert!(set.contains(Concept::PortfolioOptimization));
        assert!(set.contains(Concept::QuantumSearch));
    }

    #[test]
    fn test_unrelated_text_is_empty() {
        assert!(extract_plainspeak("hello world").is_empty());
        assert!(extract_plainspeak("").is_empty());
    }
}
