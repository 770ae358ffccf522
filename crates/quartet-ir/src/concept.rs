//! Quantum concepts recognized across representations.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;

/// A recognized quantum-computing idea.
///
/// The set is closed but extensible; generators degrade gracefully for
/// variants they have no dedicated output for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Concept {
    /// A qubit placed in a superposition of basis states.
    Superposition,
    /// Two or more qubits with correlated state.
    Entanglement,
    /// A parameterized rotation of a qubit.
    Rotation,
    /// Readout in the computational basis.
    Measurement,
    /// Grover-style amplitude amplification.
    QuantumSearch,
    /// Portfolio-optimization problem encoding.
    PortfolioOptimization,
}

impl Concept {
    /// Get the stable name of this concept.
    pub fn name(&self) -> &'static str {
        match self {
            Concept::Superposition => "superposition",
            Concept::Entanglement => "entanglement",
            Concept::Rotation => "rotation",
            Concept::Measurement => "measurement",
            Concept::QuantumSearch => "quantum_search",
            Concept::PortfolioOptimization => "portfolio_optimization",
        }
    }

    /// Pedagogical ordering used by every generator: state preparation
    /// first, measurement after gates, domain concepts last.
    pub fn rank(&self) -> u8 {
        match self {
            Concept::Superposition => 0,
            Concept::Entanglement => 1,
            Concept::Rotation => 2,
            Concept::Measurement => 3,
            Concept::QuantumSearch => 4,
            Concept::PortfolioOptimization => 5,
        }
    }

    /// Check whether this is an application-domain concept rather than a
    /// gate-level one.
    pub fn is_domain_specific(&self) -> bool {
        matches!(self, Concept::QuantumSearch | Concept::PortfolioOptimization)
    }
}

/// Concept-specific attributes recovered from source content.
///
/// Absent fields default per-generator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConceptParams {
    /// Qubit index (the control, for two-qubit concepts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qubit: Option<u32>,
    /// Target qubit index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    /// Rotation angle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<Angle>,
}

/// A concept detection with confidence and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedConcept {
    /// The recognized concept.
    pub concept: Concept,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Attributes extracted from the source, if any.
    pub params: ConceptParams,
}

impl DetectedConcept {
    /// Create a detection with default (absent) parameters.
    pub fn new(concept: Concept, confidence: f64) -> Self {
        Self {
            concept,
            confidence: confidence.clamp(0.0, 1.0),
            params: ConceptParams::default(),
        }
    }

    /// Attach extracted parameters.
    #[must_use]
    pub fn with_params(mut self, params: ConceptParams) -> Self {
        self.params = params;
        self
    }
}

/// The duplicate-free result of one extraction call.
///
/// Insertion order is preserved; re-inserting a concept merges confidence
/// monotonically upward and fills in parameters that were still absent.
/// Also carries the qubit count when the source declared one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConceptSet {
    declared_qubits: Option<u32>,
    items: Vec<DetectedConcept>,
}

impl ConceptSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detection, merging with an existing entry for the same
    /// concept. Repeated evidence raises confidence (noisy-OR) without
    /// duplicating the concept.
    pub fn insert(&mut self, detected: DetectedConcept) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|d| d.concept == detected.concept)
        {
            existing.confidence =
                (existing.confidence + detected.confidence * (1.0 - existing.confidence))
                    .clamp(0.0, 1.0);
            if existing.params.qubit.is_none() {
                existing.params.qubit = detected.params.qubit;
            }
            if existing.params.target.is_none() {
                existing.params.target = detected.params.target;
            }
            if existing.params.angle.is_none() {
                existing.params.angle = detected.params.angle;
            }
        } else {
            self.items.push(detected);
        }
    }

    /// Check whether a concept was detected.
    pub fn contains(&self, concept: Concept) -> bool {
        self.items.iter().any(|d| d.concept == concept)
    }

    /// Get the detection for a concept.
    pub fn get(&self, concept: Concept) -> Option<&DetectedConcept> {
        self.items.iter().find(|d| d.concept == concept)
    }

    /// Get the number of distinct concepts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no concepts were detected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate detections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DetectedConcept> {
        self.items.iter()
    }

    /// Iterate just the concepts, in insertion order.
    pub fn concepts(&self) -> impl Iterator<Item = Concept> + '_ {
        self.items.iter().map(|d| d.concept)
    }

    /// Get the detections in pedagogical order (stable within equal rank).
    pub fn ranked(&self) -> Vec<&DetectedConcept> {
        let mut items: Vec<&DetectedConcept> = self.items.iter().collect();
        items.sort_by_key(|d| d.concept.rank());
        items
    }

    /// Record the qubit count declared by the source.
    pub fn set_declared_qubits(&mut self, qubits: u32) {
        self.declared_qubits = Some(qubits.max(1));
    }

    /// Get the qubit count declared by the source, if any.
    pub fn declared_qubits(&self) -> Option<u32> {
        self.declared_qubits
    }

    /// Qubit count for generation: the declared count, defaulting to 2.
    pub fn qubits_or_default(&self) -> u32 {
        self.declared_qubits.unwrap_or(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_and_raises_confidence() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Superposition, 0.6));
        set.insert(DetectedConcept::new(Concept::Superposition, 0.6));

        assert_eq!(set.len(), 1);
        let conf = set.get(Concept::Superposition).unwrap().confidence;
        assert!(conf > 0.6 && conf <= 1.0);
    }

    #[test]
    fn test_merge_fills_absent_params() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Rotation, 0.5));
        set.insert(DetectedConcept::new(Concept::Rotation, 0.5).with_params(ConceptParams {
            qubit: Some(1),
            target: None,
            angle: Some(Angle::half_pi()),
        }));

        let params = set.get(Concept::Rotation).unwrap().params;
        assert_eq!(params.qubit, Some(1));
        assert_eq!(params.angle, Some(Angle::half_pi()));
    }

    #[test]
    fn test_ranked_order() {
        let mut set = ConceptSet::new();
        set.insert(DetectedConcept::new(Concept::Measurement, 0.9));
        set.insert(DetectedConcept::new(Concept::PortfolioOptimization, 0.9));
        set.insert(DetectedConcept::new(Concept::Superposition, 0.9));

        let order: Vec<Concept> = set.ranked().iter().map(|d| d.concept).collect();
        assert_eq!(
            order,
            vec![
                Concept::Superposition,
                Concept::Measurement,
                Concept::PortfolioOptimization
            ]
        );
    }

    #[test]
    fn test_declared_qubits_default() {
        let mut set = ConceptSet::new();
        assert_eq!(set.qubits_or_default(), 2);
        set.set_declared_qubits(4);
        assert_eq!(set.qubits_or_default(), 4);
        assert_eq!(set.declared_qubits(), Some(4));
    }

    #[test]
    fn test_confidence_clamped() {
        let detected = DetectedConcept::new(Concept::Measurement, 1.7);
        assert!((detected.confidence - 1.0).abs() < f64::EPSILON);
    }
}
