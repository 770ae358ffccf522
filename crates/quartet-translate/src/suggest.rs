//! Rule-driven improvement suggestions attached to each round.

use quartet_ir::{Concept, ConceptSet};
use serde::{Deserialize, Serialize};

use crate::context::Context;

/// How urgently a suggestion should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Worth doing before moving on.
    Medium,
    /// The session is stuck without it.
    High,
}

/// What a suggestion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// No concepts recognized; the learner needs a starting point.
    DescribeOperation,
    /// Gates without readout.
    AddMeasurement,
    /// Entanglement declared on a single-qubit register.
    WidenRegister,
    /// Assessment scenarios expect more than one concept.
    CombineConcepts,
}

/// A single improvement hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What the suggestion is about.
    pub kind: SuggestionKind,
    /// Learner-facing message.
    pub message: String,
    /// Display urgency.
    pub priority: Priority,
}

impl Suggestion {
    fn new(kind: SuggestionKind, message: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind,
            message: message.into(),
            priority,
        }
    }
}

/// Derive suggestions for a round, highest priority first.
pub(crate) fn advise(concepts: &ConceptSet, ctx: &Context) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if concepts.is_empty() {
        suggestions.push(Suggestion::new(
            SuggestionKind::DescribeOperation,
            "No quantum concepts recognized yet. Try describing an operation, such as creating superposition.",
            Priority::High,
        ));
        return suggestions;
    }

    if !concepts.contains(Concept::Measurement) {
        suggestions.push(Suggestion::new(
            SuggestionKind::AddMeasurement,
            "The program never reads its result. Add a measurement to collapse the state into an answer.",
            Priority::Medium,
        ));
    }

    if concepts.contains(Concept::Entanglement) && concepts.declared_qubits() == Some(1) {
        suggestions.push(Suggestion::new(
            SuggestionKind::WidenRegister,
            "Entanglement needs at least two qubits; the declared register has one.",
            Priority::Medium,
        ));
    }

    if ctx.assessment_mode && concepts.len() == 1 {
        suggestions.push(Suggestion::new(
            SuggestionKind::CombineConcepts,
            "Assessment scenarios usually combine two or more concepts.",
            Priority::Low,
        ));
    }

    suggestions.sort_by(|a, b| b.priority.cmp(&a.priority));
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::DetectedConcept;

    #[test]
    fn test_empty_set_suggests_starting_point() {
        let suggestions = advise(&ConceptSet::new(), &Context::new());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::DescribeOperation);
        assert_eq!(suggestions[0].priority, Priority::High);
    }

    #[test]
    fn test_missing_measurement() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));

        let suggestions = advise(&set, &Context::new());
        assert!(
            suggestions
                .iter()
                .any(|s| s.kind == SuggestionKind::AddMeasurement)
        );
    }

    #[test]
    fn test_measured_program_is_quiet() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));
        set.insert(DetectedConcept::new(Concept::Measurement, 0.9));

        assert!(advise(&set, &Context::new()).is_empty());
    }

    #[test]
    fn test_assessment_mode_nudges_combination() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Measurement, 0.9));

        let ctx = Context {
            assessment_mode: true,
            ..Context::new()
        };
        let suggestions = advise(&set, &ctx);
        assert!(
            suggestions
                .iter()
                .any(|s| s.kind == SuggestionKind::CombineConcepts)
        );
    }
}
