//! Heuristic quality scoring for a translation round.
//!
//! The scores are proxies, not measurements: coverage and consistency come
//! from re-extracting the freshly generated targets and comparing concept
//! sets with the source (a round-trip check, not exact equality).

use quartet_ir::{Concept, ConceptSet, Payload, RepKind};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// The four named sub-scores plus their mean, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// How confidently the source concepts were detected.
    pub accuracy: f64,
    /// How much of the source concept set every target covers.
    pub completeness: f64,
    /// How much of the expected target fan-out was produced.
    pub clarity: f64,
    /// Round-trip agreement between source and target concept sets.
    pub consistency: f64,
    /// Mean of the four sub-scores.
    pub overall: f64,
}

/// Number of non-source targets a full round produces.
const EXPECTED_TARGETS: f64 = 3.0;

pub(crate) fn score(source: &ConceptSet, targets: &FxHashMap<RepKind, Payload>) -> QualityReport {
    let clarity = (targets.len() as f64 / EXPECTED_TARGETS).clamp(0.0, 1.0);

    let accuracy = if source.is_empty() {
        0.0
    } else {
        source.iter().map(|d| d.confidence).sum::<f64>() / source.len() as f64
    };

    let (completeness, consistency) = if source.is_empty() {
        // Nothing to cover: vacuously satisfied.
        (1.0, 1.0)
    } else if targets.is_empty() {
        (0.0, 0.0)
    } else {
        let source_concepts: FxHashSet<Concept> = source.concepts().collect();
        let mut coverage_sum = 0.0;
        let mut jaccard_sum = 0.0;

        for (kind, payload) in targets {
            let target_concepts: FxHashSet<Concept> =
                quartet_extract::extract(*kind, payload).concepts().collect();
            let intersection = source_concepts.intersection(&target_concepts).count() as f64;
            let union = source_concepts.union(&target_concepts).count() as f64;

            coverage_sum += intersection / source_concepts.len() as f64;
            jaccard_sum += if union == 0.0 { 1.0 } else { intersection / union };
        }

        let n = targets.len() as f64;
        (coverage_sum / n, jaccard_sum / n)
    };

    let overall = (accuracy + completeness + clarity + consistency) / 4.0;

    QualityReport {
        accuracy,
        completeness,
        clarity,
        consistency,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_ir::DetectedConcept;

    fn in_unit_interval(report: &QualityReport) -> bool {
        [
            report.accuracy,
            report.completeness,
            report.clarity,
            report.consistency,
            report.overall,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_empty_round_scores() {
        let report = score(&ConceptSet::new(), &FxHashMap::default());
        assert!(in_unit_interval(&report));
        assert!((report.accuracy - 0.0).abs() < f64::EPSILON);
        assert!((report.completeness - 1.0).abs() < f64::EPSILON);
        assert!((report.clarity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_faithful_targets_score_high() {
        let mut source = ConceptSet::new();
        source.insert(DetectedConcept::new(Concept::Superposition, 1.0));

        let mut targets = FxHashMap::default();
        targets.insert(RepKind::Code, Payload::text("qc = QuantumCircuit(1)\nqc.h(0)"));

        let report = score(&source, &targets);
        assert!(in_unit_interval(&report));
        assert!((report.completeness - 1.0).abs() < f64::EPSILON);
        assert!((report.consistency - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_target_lowers_clarity() {
        let mut source = ConceptSet::new();
        source.insert(DetectedConcept::new(Concept::Superposition, 1.0));

        let mut two = FxHashMap::default();
        two.insert(RepKind::Code, Payload::text("qc.h(0)"));
        two.insert(RepKind::Notation, Payload::text("|0\\rangle + |1\\rangle"));

        let mut three = two.clone();
        three.insert(
            RepKind::Plainspeak,
            Payload::text("creates superposition"),
        );

        let partial = score(&source, &two);
        let full = score(&source, &three);
        assert!(partial.clarity < full.clarity);
        assert!((full.clarity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_is_mean_of_subscores() {
        let mut source = ConceptSet::new();
        source.insert(DetectedConcept::new(Concept::Entanglement, 0.8));

        let mut targets = FxHashMap::default();
        targets.insert(RepKind::Plainspeak, Payload::text("an entangled bell state"));

        let report = score(&source, &targets);
        let mean =
            (report.accuracy + report.completeness + report.clarity + report.consistency) / 4.0;
        assert!((report.overall - mean).abs() < 1e-12);
    }
}
