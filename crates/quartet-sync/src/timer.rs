//! Cancellable debounce timer.

use tokio::time::{Duration, Instant};

/// The debounce deadline as an explicit, inspectable value.
///
/// Arming replaces any previous deadline, which is exactly the
/// last-write-wins semantics of the edit queue: a new edit resets the
/// window rather than queueing a second unit of work.
#[derive(Debug, Default)]
pub(crate) struct Debounce {
    deadline: Option<Instant>,
}

impl Debounce {
    /// Arm (or re-arm) the timer to fire `after` from now.
    pub fn arm(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The current deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
