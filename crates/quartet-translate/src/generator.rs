//! The generator trait implemented by each target representation.

use quartet_ir::{ConceptSet, Payload, RepKind};

use crate::context::Context;
use crate::error::TranslateResult;

/// A renderer from a concept set to one representation's content.
///
/// Implementations must be pure: the same inputs produce byte-identical
/// output. The coordinator relies on this to keep repeated rounds stable,
/// and the engine relies on it for round-trip convergence.
pub trait Generator: Send + Sync {
    /// The representation this generator produces.
    fn target(&self) -> RepKind;

    /// Render content for the concept set.
    ///
    /// `source` is the raw origin content, available for fallback; `ctx`
    /// carries audience and scenario. An empty concept set must yield the
    /// representation's ready-state template, not an error.
    fn generate(
        &self,
        concepts: &ConceptSet,
        source: &Payload,
        ctx: &Context,
    ) -> TranslateResult<Payload>;
}
