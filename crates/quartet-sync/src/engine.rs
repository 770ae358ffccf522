//! The synchronization engine: state machine, debounce, listeners.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quartet_ir::{Audience, CircuitModel, Payload, RepKind, RepresentationState};
use quartet_translate::{Context, TranslationCoordinator};
use tokio::sync::Notify;
use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

use crate::event::{ListenerId, RoundRecord, SyncEvent, SyncUpdate, TransientNotice};
use crate::timer::Debounce;

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// How long input must pause before a translation round starts.
    pub debounce: Duration,
    /// Maximum retained round-history records (oldest evicted).
    pub history_limit: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            history_limit: 50,
        }
    }
}

/// Where the engine is in its edit-processing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing queued, nothing running.
    Idle,
    /// An edit is waiting out the debounce window.
    Pending,
    /// A translation round is executing.
    Translating,
}

struct PendingEdit {
    origin: RepKind,
    payload: Payload,
}

/// Partial state for programmatic updates; `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    /// Replace the plain-language slot.
    pub plainspeak: Option<String>,
    /// Replace the code slot.
    pub code: Option<String>,
    /// Replace the circuit slot.
    pub circuit: Option<CircuitModel>,
    /// Replace the notation slot.
    pub notation: Option<String>,
    /// Replace the scenario identifier.
    pub scenario: Option<String>,
    /// Replace the audience.
    pub audience: Option<Audience>,
    /// Replace the business framing.
    pub business_context: Option<String>,
    /// Replace the assessment flag.
    pub assessment_mode: Option<bool>,
}

/// Options accepted when entering a scenario.
#[derive(Debug, Clone, Default)]
pub struct EntryOptions {
    /// Audience for plain-language output.
    pub audience: Option<Audience>,
    /// Business framing for the scenario.
    pub business_context: Option<String>,
    /// Assessment flag.
    pub assessment_mode: Option<bool>,
    /// Initial content for the entry representation, translated
    /// immediately (no debounce).
    pub seed: Option<Payload>,
}

struct Inner {
    state: RepresentationState,
    phase: Phase,
    pending: Option<PendingEdit>,
    timer: Debounce,
    history: VecDeque<RoundRecord>,
    last_notice: Option<TransientNotice>,
    rounds_completed: u64,
}

type Listener = Arc<dyn Fn(&SyncEvent) + Send + Sync>;

/// The stateful synchronization core.
///
/// Owns the canonical [`RepresentationState`] and serializes all mutation
/// through one edit-processing cycle: `Idle → Pending → Translating → Idle`.
/// Edits arriving inside the debounce window replace the pending payload
/// (last-write-wins); edits arriving mid-round queue for the next cycle;
/// edits the engine's own publishing provokes are suppressed, which is what
/// prevents panel feedback loops.
///
/// All collaborators are injected at construction. External readers get
/// snapshots from [`state`](SyncEngine::state), never live references.
pub struct SyncEngine {
    config: SyncConfig,
    coordinator: TranslationCoordinator,
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
    updating: AtomicBool,
    wake: Notify,
}

impl SyncEngine {
    /// Create an engine with default configuration.
    pub fn new(coordinator: TranslationCoordinator) -> Self {
        Self::with_config(coordinator, SyncConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(coordinator: TranslationCoordinator, config: SyncConfig) -> Self {
        Self {
            config,
            coordinator,
            inner: Mutex::new(Inner {
                state: RepresentationState::default(),
                phase: Phase::Idle,
                pending: None,
                timer: Debounce::default(),
                history: VecDeque::new(),
                last_notice: None,
                rounds_completed: 0,
            }),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(0),
            updating: AtomicBool::new(false),
            wake: Notify::new(),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listener_list(&self) -> MutexGuard<'_, Vec<(ListenerId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Edit intake
    // =========================================================================

    /// Record a user edit on one representation.
    ///
    /// Non-blocking. Within a debounce window only the most recent payload
    /// survives. Calls made while the engine is publishing an update are
    /// panel echo and are dropped.
    pub fn notify_edit(&self, origin: RepKind, payload: Payload) {
        if self.updating.load(Ordering::SeqCst) {
            debug!(origin = %origin, "edit during publish window suppressed (panel echo)");
            return;
        }

        let mut inner = self.inner();
        if inner.pending.is_some() {
            debug!(origin = %origin, "pending edit replaced (last-write-wins)");
        }
        inner.pending = Some(PendingEdit { origin, payload });
        inner.timer.arm(self.config.debounce);
        if inner.phase == Phase::Idle {
            inner.phase = Phase::Pending;
            debug!("phase: Idle -> Pending");
        }
        drop(inner);

        self.wake.notify_one();
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener; returns a handle for removal.
    pub fn add_listener(
        &self,
        listener: impl Fn(&SyncEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listener_list().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the handle was unknown.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listener_list();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Whether the engine is currently publishing to listeners. Panels that
    /// mirror state into edit-emitting widgets consult this to avoid echo.
    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::SeqCst)
    }

    fn publish(&self, event: &SyncEvent) {
        let listeners: Vec<Listener> = self
            .listener_list()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        self.updating.store(true, Ordering::SeqCst);
        for listener in listeners {
            listener(event);
        }
        self.updating.store(false, Ordering::SeqCst);
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Immutable snapshot of the canonical state.
    pub fn state(&self) -> RepresentationState {
        self.inner().state.clone()
    }

    /// Where the engine is in its edit-processing cycle.
    pub fn phase(&self) -> Phase {
        self.inner().phase
    }

    /// Number of completed translation rounds.
    pub fn rounds_completed(&self) -> u64 {
        self.inner().rounds_completed
    }

    /// The bounded round history, oldest first.
    pub fn history(&self) -> Vec<RoundRecord> {
        self.inner().history.iter().cloned().collect()
    }

    /// The failure notice from the most recent round, if it has not been
    /// dismissed by a successful one since.
    pub fn last_notice(&self) -> Option<TransientNotice> {
        self.inner().last_notice.clone()
    }

    /// Apply a programmatic update immediately: no debounce, no translation.
    /// Publishes [`SyncEvent::StateReplaced`].
    pub fn set_state(&self, patch: StatePatch) {
        let snapshot = {
            let mut inner = self.inner();
            let state = &mut inner.state;
            if let Some(v) = patch.plainspeak {
                state.plainspeak = v;
            }
            if let Some(v) = patch.code {
                state.code = v;
            }
            if let Some(v) = patch.circuit {
                state.circuit = Some(v);
            }
            if let Some(v) = patch.notation {
                state.notation = v;
            }
            if let Some(v) = patch.scenario {
                state.metadata.scenario = Some(v);
            }
            if let Some(v) = patch.audience {
                state.metadata.audience = v;
            }
            if let Some(v) = patch.business_context {
                state.metadata.business_context = Some(v);
            }
            if let Some(v) = patch.assessment_mode {
                state.metadata.assessment_mode = v;
            }
            inner.state.clone()
        };
        self.publish(&SyncEvent::StateReplaced(snapshot));
    }

    /// Enter a scenario: record its context and, when seeded with content,
    /// run an immediate translation round on the entry representation.
    pub fn set_contextual_entry(
        &self,
        scenario: impl Into<String>,
        entry_point: RepKind,
        options: EntryOptions,
    ) {
        {
            let mut inner = self.inner();
            let meta = &mut inner.state.metadata;
            meta.scenario = Some(scenario.into());
            meta.entry_point = Some(entry_point);
            if let Some(audience) = options.audience {
                meta.audience = audience;
            }
            if let Some(context) = options.business_context {
                meta.business_context = Some(context);
            }
            if let Some(mode) = options.assessment_mode {
                meta.assessment_mode = mode;
            }
        }

        if let Some(seed) = options.seed {
            self.run_round(entry_point, seed);
        }
    }

    // =========================================================================
    // Round processing
    // =========================================================================

    /// Drive queued edits to quiescence: wait out the debounce window,
    /// translate, repeat until nothing is pending. The deterministic driver
    /// for tests and synchronous hosts.
    pub async fn drain(&self) {
        loop {
            let (has_pending, deadline) = {
                let inner = self.inner();
                (inner.pending.is_some(), inner.timer.deadline())
            };
            if !has_pending {
                return;
            }
            if let Some(deadline) = deadline {
                if deadline > time::Instant::now() {
                    time::sleep_until(deadline).await;
                    // A newer edit may have pushed the window out while we
                    // slept; re-check before translating.
                    continue;
                }
            }
            self.process_due_edit();
        }
    }

    /// Spawn the background processor for async hosts. Woken by edits,
    /// fires rounds as debounce windows close. Abort the handle to stop.
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                let (has_pending, deadline) = {
                    let inner = self.inner();
                    (inner.pending.is_some(), inner.timer.deadline())
                };

                if !has_pending {
                    self.wake.notified().await;
                    continue;
                }

                if let Some(deadline) = deadline {
                    if deadline > time::Instant::now() {
                        tokio::select! {
                            () = time::sleep_until(deadline) => {}
                            () = self.wake.notified() => {}
                        }
                        continue;
                    }
                }

                self.process_due_edit();
            }
        })
    }

    fn process_due_edit(&self) {
        let edit = {
            let mut inner = self.inner();
            inner.timer.cancel();
            let Some(edit) = inner.pending.take() else {
                return;
            };
            inner.phase = Phase::Translating;
            debug!("phase: Pending -> Translating");
            edit
        };
        self.run_round(edit.origin, edit.payload);
    }

    fn run_round(&self, origin: RepKind, payload: Payload) {
        let ctx = Context::for_metadata(&self.inner().state.metadata);

        match self.coordinator.translate_all(origin, &payload, &ctx) {
            Ok(round) => {
                let update = {
                    let mut inner = self.inner();

                    inner.state.set(origin, payload.clone());
                    for (kind, content) in &round.targets {
                        inner.state.set(*kind, content.clone());
                    }
                    if round.targets.is_empty() {
                        warn!(source = %origin, "round produced no targets; only the raw edit is visible");
                    }

                    inner.rounds_completed += 1;
                    inner.last_notice = None;
                    inner.history.push_back(RoundRecord {
                        source: origin,
                        overall_quality: round.quality.overall,
                        completed_at: chrono::Utc::now(),
                    });
                    while inner.history.len() > self.config.history_limit {
                        inner.history.pop_front();
                    }

                    inner.phase = if inner.pending.is_some() {
                        Phase::Pending
                    } else {
                        Phase::Idle
                    };
                    debug!(next = ?inner.phase, "phase: Translating -> next");

                    SyncUpdate {
                        source: origin,
                        value: payload,
                        translations: round.targets,
                        quality: round.quality,
                        suggestions: round.suggestions,
                        state: inner.state.clone(),
                    }
                };

                info!(
                    source = %update.source,
                    quality = update.quality.overall,
                    "translation round completed"
                );
                self.publish(&SyncEvent::Round(update));
            }
            Err(e) => {
                warn!(source = %origin, error = %e, "translation round failed");
                let notice = TransientNotice {
                    message: format!("Could not translate this edit: {e}"),
                };
                {
                    let mut inner = self.inner();
                    inner.last_notice = Some(notice.clone());
                    inner.phase = if inner.pending.is_some() {
                        Phase::Pending
                    } else {
                        Phase::Idle
                    };
                }
                self.publish(&SyncEvent::Notice(notice));
            }
        }
    }
}
