//! Quartet Core Data Model
//!
//! This crate provides the shared data structures for Quartet, a library that
//! keeps four parallel representations of a quantum program (plain language,
//! pseudo-Qiskit code, a circuit model, and mathematical notation) in sync.
//!
//! # Core Components
//!
//! - **Concepts**: [`Concept`], [`DetectedConcept`], [`ConceptSet`] for the
//!   semantic units recognized in source content and consumed by generators
//! - **Circuit model**: [`CircuitModel`], [`Operation`], [`GateKind`],
//!   [`Angle`] for the validated structural representation
//! - **Representations**: [`RepKind`], [`Payload`], [`RepresentationState`],
//!   [`SessionMetadata`], [`Audience`] for the four slots and their context
//! - **Errors**: [`ModelError`] for operations that would violate a circuit
//!   invariant
//!
//! # Example: Building a Bell Circuit
//!
//! ```rust
//! use quartet_ir::CircuitModel;
//!
//! let mut circuit = CircuitModel::new(2);
//! circuit.h(0).unwrap();
//! circuit.cx(0, 1).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.qubits(), 2);
//! assert_eq!(circuit.num_ops(), 4); // H, CX, two measures
//! ```
//!
//! Invalid operations are rejected before they can corrupt the model:
//!
//! ```rust
//! use quartet_ir::CircuitModel;
//!
//! let mut circuit = CircuitModel::new(2);
//! assert!(circuit.cx(1, 1).is_err()); // target equals control
//! assert!(circuit.h(5).is_err());     // qubit out of range
//! ```

pub mod angle;
pub mod circuit;
pub mod concept;
pub mod error;
pub mod gate;
pub mod state;

pub use angle::Angle;
pub use circuit::{CircuitModel, Operation};
pub use concept::{Concept, ConceptParams, ConceptSet, DetectedConcept};
pub use error::{ModelError, ModelResult};
pub use gate::GateKind;
pub use state::{Audience, Payload, RepKind, RepresentationState, SessionMetadata};
