//! Error handling for translation.

use quartet_ir::RepKind;
use thiserror::Error;

/// Errors surfaced by the translation layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// The edit payload's shape does not fit its declared representation.
    #[error("payload shape does not fit representation '{representation}'")]
    PayloadMismatch {
        /// The representation the payload was tagged with.
        representation: RepKind,
    },

    /// A single generator failed to produce its target.
    #[error("generator for '{target}' failed: {reason}")]
    Generation {
        /// The target representation that could not be produced.
        target: RepKind,
        /// Why generation failed.
        reason: String,
    },
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
