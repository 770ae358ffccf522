//! Representation kinds, payloads, and the canonical session state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::circuit::CircuitModel;

/// One of the four parallel views of a quantum program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepKind {
    /// Plain-language description.
    Plainspeak,
    /// Pseudo-Qiskit Python code.
    Code,
    /// Structural circuit model.
    Circuit,
    /// LaTeX mathematical notation.
    Notation,
}

impl RepKind {
    /// All four representations.
    pub const ALL: [RepKind; 4] = [
        RepKind::Plainspeak,
        RepKind::Code,
        RepKind::Circuit,
        RepKind::Notation,
    ];

    /// Get the stable name of this representation.
    pub fn name(&self) -> &'static str {
        match self {
            RepKind::Plainspeak => "plainspeak",
            RepKind::Code => "code",
            RepKind::Circuit => "circuit",
            RepKind::Notation => "notation",
        }
    }

    /// Check whether this representation's content is text.
    pub fn is_textual(&self) -> bool {
        !matches!(self, RepKind::Circuit)
    }
}

impl fmt::Display for RepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An edit value for one representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Text content (plainspeak, code, notation).
    Text(String),
    /// A circuit model.
    Circuit(CircuitModel),
}

impl Payload {
    /// Create a text payload.
    pub fn text(content: impl Into<String>) -> Self {
        Payload::Text(content.into())
    }

    /// Get the text content, if textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Circuit(_) => None,
        }
    }

    /// Get the circuit model, if structural.
    pub fn as_circuit(&self) -> Option<&CircuitModel> {
        match self {
            Payload::Text(_) => None,
            Payload::Circuit(c) => Some(c),
        }
    }

    /// Check whether this payload shape fits the given representation.
    pub fn fits(&self, kind: RepKind) -> bool {
        kind.is_textual() == matches!(self, Payload::Text(_))
    }
}

/// Who the plain-language output is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    /// Business leadership; outcome-focused phrasing.
    Executive,
    /// Engineers; precise gate-level phrasing.
    #[default]
    Technical,
    /// Project stakeholders; progress-focused phrasing.
    Stakeholder,
    /// External clients; benefit-focused phrasing.
    Client,
}

impl Audience {
    /// Get the stable name of this audience.
    pub fn name(&self) -> &'static str {
        match self {
            Audience::Executive => "executive",
            Audience::Technical => "technical",
            Audience::Stakeholder => "stakeholder",
            Audience::Client => "client",
        }
    }
}

/// Context that influences generation but is not itself a representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// The representation the session was entered through.
    pub entry_point: Option<RepKind>,
    /// Active scenario identifier, if any.
    pub scenario: Option<String>,
    /// Audience for plain-language output.
    pub audience: Audience,
    /// Free-form business framing for the scenario.
    pub business_context: Option<String>,
    /// Whether the session is in assessment mode.
    pub assessment_mode: bool,
}

/// The engine's canonical snapshot: four slots plus session metadata.
///
/// At any quiescent moment the slots are the best-effort mutually consistent
/// output of the last successful translation round. Callers always receive
/// clones, never live references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepresentationState {
    /// Plain-language description.
    pub plainspeak: String,
    /// Pseudo-Qiskit code.
    pub code: String,
    /// Circuit model; `None` means no circuit yet.
    pub circuit: Option<CircuitModel>,
    /// LaTeX notation.
    pub notation: String,
    /// Generation context.
    pub metadata: SessionMetadata,
}

impl RepresentationState {
    /// Get a slot's content as a payload. `None` only for an unset circuit.
    pub fn payload(&self, kind: RepKind) -> Option<Payload> {
        match kind {
            RepKind::Plainspeak => Some(Payload::Text(self.plainspeak.clone())),
            RepKind::Code => Some(Payload::Text(self.code.clone())),
            RepKind::Notation => Some(Payload::Text(self.notation.clone())),
            RepKind::Circuit => self.circuit.clone().map(Payload::Circuit),
        }
    }

    /// Write a slot. Returns false if the payload shape does not fit the
    /// representation, leaving the state unchanged.
    pub fn set(&mut self, kind: RepKind, payload: Payload) -> bool {
        match (kind, payload) {
            (RepKind::Plainspeak, Payload::Text(s)) => {
                self.plainspeak = s;
                true
            }
            (RepKind::Code, Payload::Text(s)) => {
                self.code = s;
                true
            }
            (RepKind::Notation, Payload::Text(s)) => {
                self.notation = s;
                true
            }
            (RepKind::Circuit, Payload::Circuit(c)) => {
                self.circuit = Some(c);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_fits() {
        assert!(Payload::text("h q[0]").fits(RepKind::Code));
        assert!(!Payload::text("h q[0]").fits(RepKind::Circuit));
        assert!(Payload::Circuit(CircuitModel::new(2)).fits(RepKind::Circuit));
    }

    #[test]
    fn test_state_set_and_payload() {
        let mut state = RepresentationState::default();
        assert!(state.set(RepKind::Code, Payload::text("qc.h(0)")));
        assert_eq!(state.code, "qc.h(0)");

        assert!(!state.set(RepKind::Code, Payload::Circuit(CircuitModel::new(1))));
        assert_eq!(state.code, "qc.h(0)");

        assert!(state.payload(RepKind::Circuit).is_none());
        assert!(state.set(RepKind::Circuit, Payload::Circuit(CircuitModel::new(2))));
        assert!(state.payload(RepKind::Circuit).is_some());
    }

    #[test]
    fn test_state_json_round_trip() {
        let mut state = RepresentationState {
            plainspeak: "creates superposition".into(),
            ..Default::default()
        };
        state.circuit = Some(CircuitModel::bell().unwrap());
        state.metadata.audience = Audience::Executive;

        let json = serde_json::to_string(&state).unwrap();
        let back: RepresentationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_audience_default_is_technical() {
        assert_eq!(Audience::default(), Audience::Technical);
    }
}
