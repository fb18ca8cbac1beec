//! Synchronization plumbing: the debounce timer and the engine state.
//!
//! The host's event loop is the only scheduler. A "timer" here is just a
//! queued timestamp compared against the clock the host passes in; firing
//! happens synchronously inside `tick`. There is no thread and no lock —
//! the re-entrancy guard is a plain flag, which is sound because handlers
//! run to completion before the loop moves on.

/// Default delay between the last result-view edit and reconciliation.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// A cancellable delay-and-coalesce deadline.
///
/// Queueing while a deadline is pending restarts it, so a burst of edits
/// collapses into a single firing carrying the last edit's content.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay_ms: u64,
    queued_at: Option<u64>,
}

impl DebounceTimer {
    pub fn new(delay_ms: u64) -> Self {
        DebounceTimer {
            delay_ms,
            queued_at: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now_ms`.
    pub fn queue(&mut self, now_ms: u64) {
        self.queued_at = Some(now_ms);
    }

    /// Drop any pending deadline.
    pub fn cancel(&mut self) {
        self.queued_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.queued_at.is_some()
    }

    /// Consume the deadline if the delay has elapsed by `now_ms`.
    pub fn take_ready(&mut self, now_ms: u64) -> bool {
        match self.queued_at {
            Some(queued_at) if now_ms.saturating_sub(queued_at) >= self.delay_ms => {
                self.queued_at = None;
                true
            }
            _ => false,
        }
    }
}

/// Change-propagation state for the result surface.
///
/// Tracks the debounce deadline and the re-entrancy guard that keeps
/// engine-initiated surface writes from feeding back into the edit handler.
#[derive(Debug)]
pub struct SyncEngine {
    timer: DebounceTimer,
    engine_write: bool,
}

impl SyncEngine {
    pub fn new(delay_ms: u64) -> Self {
        SyncEngine {
            timer: DebounceTimer::new(delay_ms),
            engine_write: false,
        }
    }

    /// Whether an engine-initiated surface write is in progress.
    pub fn guard_active(&self) -> bool {
        self.engine_write
    }

    pub(crate) fn set_guard(&mut self, active: bool) {
        self.engine_write = active;
    }

    /// Record a result-surface edit. Returns `false` when the change came
    /// from the engine's own write and must be ignored.
    pub fn note_result_edit(&mut self, now_ms: u64) -> bool {
        if self.engine_write {
            log::trace!("result change at {now_ms}ms ignored: engine write in progress");
            return false;
        }
        log::trace!("result edit at {now_ms}ms, reconciliation queued");
        self.timer.queue(now_ms);
        true
    }

    /// Cancel any pending reconciliation (mode switches must not let a stale
    /// pass write into a surface that is no longer authoritative).
    pub fn cancel_pending(&mut self) {
        if self.timer.is_pending() {
            log::debug!("pending reconciliation cancelled");
        }
        self.timer.cancel();
    }

    pub fn reconcile_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Consume the deadline if it is due.
    pub fn take_ready(&mut self, now_ms: u64) -> bool {
        self.timer.take_ready(now_ms)
    }
}
