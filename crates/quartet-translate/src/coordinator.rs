//! Orchestrates extraction and fan-out generation for one edit.

use quartet_ir::{ConceptSet, Payload, RepKind};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::context::Context;
use crate::error::{TranslateError, TranslateResult};
use crate::generator::Generator;
use crate::generators::{CircuitGenerator, CodeGenerator, NotationGenerator, PlainspeakGenerator};
use crate::quality::{self, QualityReport};
use crate::suggest::{self, Suggestion};

/// The outcome of one translation round.
#[derive(Debug, Clone)]
pub struct TranslationRound {
    /// The representation the edit came from.
    pub source: RepKind,
    /// What was recognized in the source.
    pub concepts: ConceptSet,
    /// Successfully generated content per non-source representation. A
    /// failing generator is simply absent.
    pub targets: FxHashMap<RepKind, Payload>,
    /// Heuristic quality of the round.
    pub quality: QualityReport,
    /// Improvement hints, highest priority first.
    pub suggestions: Vec<Suggestion>,
}

/// Runs Extractor → Generators for a source representation and assembles
/// the result.
///
/// Per-target failures are contained: a failing generator is dropped from
/// the round with a warning, never the whole call. The one hard error is a
/// payload whose shape does not fit its declared representation.
pub struct TranslationCoordinator {
    generators: Vec<Box<dyn Generator>>,
}

impl TranslationCoordinator {
    /// Create a coordinator with the four shipped generators.
    pub fn new() -> Self {
        Self {
            generators: vec![
                Box::new(PlainspeakGenerator),
                Box::new(CodeGenerator),
                Box::new(CircuitGenerator),
                Box::new(NotationGenerator),
            ],
        }
    }

    /// Replace the generator for one target representation (custom
    /// renderers in hosts, failure injection in tests).
    pub fn set_generator(&mut self, generator: Box<dyn Generator>) {
        let target = generator.target();
        self.generators.retain(|g| g.target() != target);
        self.generators.push(generator);
    }

    /// Translate an edit into content for every other representation.
    pub fn translate_all(
        &self,
        source: RepKind,
        payload: &Payload,
        ctx: &Context,
    ) -> TranslateResult<TranslationRound> {
        if !payload.fits(source) {
            return Err(TranslateError::PayloadMismatch {
                representation: source,
            });
        }

        let concepts = quartet_extract::extract(source, payload);
        debug!(source = %source, concepts = concepts.len(), "extracted concept set");

        let mut targets = FxHashMap::default();
        for generator in &self.generators {
            let target = generator.target();
            if target == source {
                continue;
            }
            match generator.generate(&concepts, payload, ctx) {
                Ok(content) => {
                    targets.insert(target, content);
                }
                Err(e) => {
                    warn!(representation = %target, error = %e, "generator failed; target omitted from round");
                }
            }
        }

        let quality = quality::score(&concepts, &targets);
        let suggestions = suggest::advise(&concepts, ctx);

        Ok(TranslationRound {
            source,
            concepts,
            targets,
            quality,
            suggestions,
        })
    }
}

impl Default for TranslationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::{CircuitModel, Concept};

    struct FailingGenerator(RepKind);

    impl Generator for FailingGenerator {
        fn target(&self) -> RepKind {
            self.0
        }

        fn generate(
            &self,
            _concepts: &ConceptSet,
            _source: &Payload,
            _ctx: &Context,
        ) -> TranslateResult<Payload> {
            Err(TranslateError::Generation {
                target: self.0,
                reason: "forced failure".into(),
            })
        }
    }

    #[test]
    fn test_round_covers_other_three_representations() {
        let coordinator = TranslationCoordinator::new();
        let round = coordinator
            .translate_all(
                RepKind::Plainspeak,
                &Payload::text("create superposition"),
                &Context::new(),
            )
            .unwrap();

        assert_eq!(round.targets.len(), 3);
        assert!(round.targets.contains_key(&RepKind::Code));
        assert!(round.targets.contains_key(&RepKind::Circuit));
        assert!(round.targets.contains_key(&RepKind::Notation));
        assert!(!round.targets.contains_key(&RepKind::Plainspeak));
    }

    #[test]
    fn test_partial_failure_isolation() {
        let mut coordinator = TranslationCoordinator::new();
        coordinator.set_generator(Box::new(FailingGenerator(RepKind::Notation)));

        let round = coordinator
            .translate_all(
                RepKind::Plainspeak,
                &Payload::text("entanglement"),
                &Context::new(),
            )
            .unwrap();

        assert!(round.targets.contains_key(&RepKind::Code));
        assert!(round.targets.contains_key(&RepKind::Circuit));
        assert!(!round.targets.contains_key(&RepKind::Notation));
    }

    #[test]
    fn test_payload_mismatch_is_the_hard_error() {
        let coordinator = TranslationCoordinator::new();
        let err = coordinator
            .translate_all(
                RepKind::Code,
                &Payload::Circuit(CircuitModel::new(2)),
                &Context::new(),
            )
            .unwrap_err();
        assert!(matches!(err, TranslateError::PayloadMismatch { .. }));
    }

    #[test]
    fn test_unknown_content_yields_ready_state_targets() {
        let coordinator = TranslationCoordinator::new();
        let round = coordinator
            .translate_all(
                RepKind::Plainspeak,
                &Payload::text("nothing quantum here"),
                &Context::new(),
            )
            .unwrap();

        assert!(round.concepts.is_empty());
        assert_eq!(round.targets.len(), 3);
        let notation = round.targets[&RepKind::Notation].as_text().unwrap();
        assert!(notation.starts_with("|0\\rangle^{\\otimes"));
    }

    #[test]
    fn test_plainspeak_sentence_to_code_and_notation() {
        let coordinator = TranslationCoordinator::new();
        let round = coordinator
            .translate_all(
                RepKind::Plainspeak,
                &Payload::text("This creates superposition and then measures the qubit"),
                &Context::new(),
            )
            .unwrap();

        let concepts: Vec<Concept> = round.concepts.concepts().collect();
        assert!(concepts.contains(&Concept::Superposition));
        assert!(concepts.contains(&Concept::Measurement));

        let code = round.targets[&RepKind::Code].as_text().unwrap();
        let h = code.find("qc.h(").expect("superposition gate statement");
        let m = code.find("qc.measure_all()").expect("measurement statement");
        assert!(h < m);

        let notation = round.targets[&RepKind::Notation].as_text().unwrap();
        assert!(notation.contains("|0\\rangle + |1\\rangle"));
        assert!(notation.contains("\\rangle|^2"));
    }

    #[test]
    fn test_bell_prep_circuit_to_plainspeak_and_code() {
        let mut model = CircuitModel::new(2);
        model.h(0).unwrap().cx(0, 1).unwrap();

        let coordinator = TranslationCoordinator::new();
        let round = coordinator
            .translate_all(RepKind::Circuit, &Payload::Circuit(model), &Context::new())
            .unwrap();

        let plainspeak = round.targets[&RepKind::Plainspeak].as_text().unwrap();
        assert!(plainspeak.to_lowercase().contains("superposition"));
        assert!(plainspeak.to_lowercase().contains("entangle"));

        let code = round.targets[&RepKind::Code].as_text().unwrap();
        let h = code.find("qc.h(0)").expect("gate on qubit 0");
        let cx = code.find("qc.cx(0, 1)").expect("two-qubit call");
        assert!(h < cx);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let coordinator = TranslationCoordinator::new();
        let payload = Payload::text("create superposition");

        let first = coordinator
            .translate_all(RepKind::Plainspeak, &payload, &Context::new())
            .unwrap();
        let second = coordinator
            .translate_all(RepKind::Plainspeak, &payload, &Context::new())
            .unwrap();

        assert_eq!(
            first.targets[&RepKind::Code].as_text(),
            second.targets[&RepKind::Code].as_text()
        );
        assert_eq!(first.targets[&RepKind::Circuit], second.targets[&RepKind::Circuit]);
    }

    #[test]
    fn test_round_trip_concept_survives() {
        let coordinator = TranslationCoordinator::new();

        let round = coordinator
            .translate_all(
                RepKind::Plainspeak,
                &Payload::text("superposition"),
                &Context::new(),
            )
            .unwrap();
        let code = round.targets[&RepKind::Code].clone();

        let back = coordinator
            .translate_all(RepKind::Code, &code, &Context::new())
            .unwrap();
        let plainspeak = &back.targets[&RepKind::Plainspeak];
        let reread = quartet_extract::extract(RepKind::Plainspeak, plainspeak);
        assert!(reread.contains(Concept::Superposition));
    }
}
