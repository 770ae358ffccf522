//! Events published to listeners, and their supporting types.

use chrono::{DateTime, Utc};
use quartet_ir::{Payload, RepKind, RepresentationState};
use quartet_translate::{QualityReport, Suggestion};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Opaque handle returned by listener registration, accepted by removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Payload delivered to listeners after a completed translation round.
#[derive(Debug, Clone)]
pub struct SyncUpdate {
    /// The representation the edit came from.
    pub source: RepKind,
    /// The raw edited value, as written into the state.
    pub value: Payload,
    /// The successfully translated targets of this round.
    pub translations: FxHashMap<RepKind, Payload>,
    /// Heuristic quality of the round.
    pub quality: QualityReport,
    /// Improvement hints, highest priority first.
    pub suggestions: Vec<Suggestion>,
    /// Snapshot of the full state after the round.
    pub state: RepresentationState,
}

/// A user-visible failure notice. Auto-dismissed: the engine clears it on
/// the next successful round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransientNotice {
    /// Learner-facing message.
    pub message: String,
}

/// Everything the engine publishes to its listeners.
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// A translation round completed and the state was updated.
    Round(SyncUpdate),
    /// A programmatic `set_state` replaced slots without translation.
    StateReplaced(RepresentationState),
    /// A translation round failed; the state is unchanged.
    Notice(TransientNotice),
}

/// One entry in the bounded round history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The representation whose edit drove the round.
    pub source: RepKind,
    /// The round's overall quality score.
    pub overall_quality: f64,
    /// When the round completed.
    pub completed_at: DateTime<Utc>,
}
