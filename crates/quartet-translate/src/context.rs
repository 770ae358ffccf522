//! Generation context derived from session metadata.

use quartet_ir::{Audience, RepKind, SessionMetadata};

/// Context that shapes generated output without being content itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    /// Audience for plain-language phrasing.
    pub audience: Audience,
    /// Active scenario identifier, if any.
    pub scenario: Option<String>,
    /// Free-form business framing for the scenario.
    pub business_context: Option<String>,
    /// Whether the session is in assessment mode.
    pub assessment_mode: bool,
    /// The representation the session was entered through.
    pub entry_point: Option<RepKind>,
}

impl Context {
    /// Create a default context (technical audience, no scenario).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audience.
    #[must_use]
    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    /// Derive a context from a session's metadata.
    pub fn for_metadata(metadata: &SessionMetadata) -> Self {
        Self {
            audience: metadata.audience,
            scenario: metadata.scenario.clone(),
            business_context: metadata.business_context.clone(),
            assessment_mode: metadata.assessment_mode,
            entry_point: metadata.entry_point,
        }
    }
}
