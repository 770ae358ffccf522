//! Quartet Synchronization Engine
//!
//! The stateful core that keeps the four representations of a quantum
//! program consistent. UI panels report edits with
//! [`SyncEngine::notify_edit`]; the engine debounces them (last write wins
//! inside the window), runs one translation round at a time through the
//! injected [`TranslationCoordinator`](quartet_translate::TranslationCoordinator),
//! writes the results into its canonical
//! [`RepresentationState`](quartet_ir::RepresentationState), and publishes a
//! [`SyncEvent`] to every registered listener.
//!
//! Edits provoked by the engine's own publishing are suppressed, so panels
//! that mirror updates back as input cannot create feedback loops. A failed
//! round becomes a [`TransientNotice`] and the engine returns to idle;
//! nothing here is fatal.
//!
//! # Example
//!
//! ```rust
//! use quartet_ir::{Payload, RepKind};
//! use quartet_sync::SyncEngine;
//! use quartet_translate::TranslationCoordinator;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let engine = SyncEngine::new(TranslationCoordinator::new());
//!
//! engine.notify_edit(RepKind::Plainspeak, Payload::text("create superposition"));
//! engine.drain().await;
//!
//! assert!(engine.state().code.contains("qc.h(0)"));
//! # }
//! ```

pub mod engine;
pub mod event;
mod timer;

pub use engine::{EntryOptions, Phase, StatePatch, SyncConfig, SyncEngine};
pub use event::{ListenerId, RoundRecord, SyncEvent, SyncUpdate, TransientNotice};
