//! Quartet Translation Layer
//!
//! Turns the concept set extracted from one representation into content for
//! the other three. The [`TranslationCoordinator`] runs the fan-out and
//! isolates per-target failures; the four [`Generator`] implementations
//! render plain language, pseudo-Qiskit code, circuit models, and LaTeX
//! notation.
//!
//! Generators are pure functions of their inputs: the same concept set,
//! source, and context produce byte-identical output.
//!
//! ```rust
//! use quartet_ir::{Payload, RepKind};
//! use quartet_translate::{Context, TranslationCoordinator};
//!
//! let coordinator = TranslationCoordinator::new();
//! let round = coordinator
//!     .translate_all(RepKind::Plainspeak, &Payload::text("create superposition"), &Context::new())
//!     .unwrap();
//!
//! let code = round.targets[&RepKind::Code].as_text().unwrap();
//! assert!(code.contains("qc.h(0)"));
//! ```

pub mod context;
pub mod coordinator;
pub mod error;
pub mod generator;
pub mod generators;
pub mod quality;
pub mod suggest;

pub use context::Context;
pub use coordinator::{TranslationCoordinator, TranslationRound};
pub use error::{TranslateError, TranslateResult};
pub use generator::Generator;
pub use generators::{CircuitGenerator, CodeGenerator, NotationGenerator, PlainspeakGenerator};
pub use quality::QualityReport;
pub use suggest::{Priority, Suggestion, SuggestionKind};
