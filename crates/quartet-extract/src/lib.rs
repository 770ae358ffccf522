//! Quartet Concept Extractor
//!
//! Scans content in any of the four representations and returns the quantum
//! concepts it recognizes, with approximate parameters (qubit indices,
//! angles) where the source reveals them.
//!
//! This is deliberately shallow: vocabulary lookup for plain language, a
//! token scan for code, a symbol table for notation, and a direct walk for
//! circuit models. It is pattern matching, not semantic analysis; a
//! best-effort heuristic whose misses degrade downstream output rather than
//! fail it.
//!
//! The contract is total: [`extract`] never fails. Content it cannot read
//! yields an empty [`ConceptSet`], which generators answer with their
//! ready-state templates.
//!
//! ```rust
//! use quartet_extract::extract;
//! use quartet_ir::{Concept, Payload, RepKind};
//!
//! let set = extract(
//!     RepKind::Plainspeak,
//!     &Payload::text("This creates superposition and then measures the qubit"),
//! );
//! assert!(set.contains(Concept::Superposition));
//! assert!(set.contains(Concept::Measurement));
//! ```

use quartet_ir::{ConceptSet, Payload, RepKind};
use tracing::warn;

pub mod circuit;
pub mod code;
pub mod notation;
pub mod plainspeak;

/// Extract the concept set from one representation's content.
///
/// A payload whose shape does not fit the representation kind yields an
/// empty set: callers fall back to generic output, they do not error.
pub fn extract(kind: RepKind, payload: &Payload) -> ConceptSet {
    match (kind, payload) {
        (RepKind::Plainspeak, Payload::Text(text)) => plainspeak::extract_plainspeak(text),
        (RepKind::Code, Payload::Text(text)) => code::extract_code(text),
        (RepKind::Notation, Payload::Text(text)) => notation::extract_notation(text),
        (RepKind::Circuit, Payload::Circuit(model)) => circuit::extract_circuit(model),
        (kind, _) => {
            warn!(representation = %kind, "payload shape does not fit representation; nothing extracted");
            ConceptSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::CircuitModel;

    #[test]
    fn test_mismatched_payload_yields_empty_set() {
        let set = extract(RepKind::Circuit, &Payload::text("qc.h(0)"));
        assert!(set.is_empty());

        let set = extract(RepKind::Code, &Payload::Circuit(CircuitModel::new(2)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_unknown_content_yields_empty_set() {
        let set = extract(RepKind::Plainspeak, &Payload::text("the weather is nice today"));
        assert!(set.is_empty());
    }
}
