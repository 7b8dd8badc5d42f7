//! Reference-counted lifecycle for the background dispatcher.
//!
//! The manager tracks two pieces of state behind a single lock:
//!
//! - `pending`: number of jobs registered and not yet finished
//! - `attached`: whether an external caller is currently using the dispatcher
//!
//! The worker may only stop from the (pending == 0, detached) state. Either of
//! the two events that can reach that state (the last `unregister`, or a
//! `detach` while nothing is pending) asks the [`ShutdownHook`] to stop the
//! worker. Every other combination is live, and attaching again after a
//! detach that did not stop the worker simply resumes normal operation.
//!
//! ```
//! use std::sync::Arc;
//!
//! use tokio_util::sync::CancellationToken;
//! use websms_core::lifecycle::{JobLifecycleManager, PendingIndicator};
//!
//! struct NoIndicator;
//! impl PendingIndicator for NoIndicator {
//!     fn show(&self) {}
//!     fn clear(&self) {}
//! }
//!
//! let shutdown = CancellationToken::new();
//! let manager =
//!     Arc::new(JobLifecycleManager::new(Arc::new(NoIndicator), Arc::new(shutdown.clone())));
//!
//! manager.attach();
//! let job = manager.start_job();
//! manager.detach();
//! assert!(!shutdown.is_cancelled());
//!
//! drop(job);
//! assert!(shutdown.is_cancelled());
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use super::ports::{PendingIndicator, ShutdownHook};

/// Point-in-time copy of the lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleSnapshot {
    pub pending: usize,
    pub attached: bool,
    pub shutdown_requested: bool,
}

#[derive(Debug, Default)]
struct LifecycleState {
    pending: usize,
    attached: bool,
    shutdown_requested: bool,
}

impl LifecycleState {
    fn is_idle(&self) -> bool {
        self.pending == 0 && !self.attached
    }

    /// Record a shutdown request if the worker is idle and detached.
    fn mark_shutdown_if_idle(&mut self) -> bool {
        if self.is_idle() {
            self.shutdown_requested = true;
            true
        } else {
            false
        }
    }
}

/// Process-wide coordinator for background jobs.
///
/// Construct one at start-up and share it behind an `Arc`.
pub struct JobLifecycleManager {
    state: Mutex<LifecycleState>,
    indicator: Arc<dyn PendingIndicator>,
    shutdown: Arc<dyn ShutdownHook>,
}

impl JobLifecycleManager {
    pub fn new(indicator: Arc<dyn PendingIndicator>, shutdown: Arc<dyn ShutdownHook>) -> Self {
        Self { state: Mutex::new(LifecycleState::default()), indicator, shutdown }
    }

    /// Register a job and return a guard that unregisters it when dropped.
    ///
    /// Prefer this over calling [`register`](Self::register) and
    /// [`unregister`](Self::unregister) by hand: the guard also releases the
    /// job when the task running it panics.
    pub fn start_job(self: &Arc<Self>) -> JobGuard {
        self.register();
        JobGuard { manager: Arc::clone(self) }
    }

    /// Count one more outstanding job and show the pending indicator.
    pub fn register(&self) {
        let mut state = self.state.lock();
        state.pending = state.pending.saturating_add(1);
        debug!(pending = state.pending, attached = state.attached, "job registered");
        self.update_indicator(state.pending);
    }

    /// Count one job as finished.
    ///
    /// Unregistering with nothing pending is an invariant violation: it is
    /// logged and the count stays at zero.
    pub fn unregister(&self) {
        let stop = {
            let mut state = self.state.lock();
            if state.pending == 0 {
                error!(
                    attached = state.attached,
                    "unregister without matching register; clamping pending count at zero"
                );
            } else {
                state.pending -= 1;
            }
            debug!(pending = state.pending, attached = state.attached, "job unregistered");
            self.update_indicator(state.pending);
            state.mark_shutdown_if_idle()
        };

        if stop {
            self.initiate_shutdown();
        }
    }

    /// Mark an external caller as attached.
    pub fn attach(&self) {
        let mut state = self.state.lock();
        if state.shutdown_requested {
            warn!(pending = state.pending, "caller attached after shutdown was requested");
        }
        state.attached = true;
        info!(pending = state.pending, "caller attached");
    }

    /// Mark the caller as gone; stops the worker if nothing is pending.
    pub fn detach(&self) {
        let stop = {
            let mut state = self.state.lock();
            state.attached = false;
            info!(pending = state.pending, "caller detached");
            state.mark_shutdown_if_idle()
        };

        if stop {
            self.initiate_shutdown();
        }
    }

    /// Reflect `count` on the pending indicator: cleared at zero, shown
    /// otherwise. The count itself is never displayed.
    pub fn update_indicator(&self, count: usize) {
        if count == 0 {
            self.indicator.clear();
        } else {
            self.indicator.show();
        }
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        let state = self.state.lock();
        LifecycleSnapshot {
            pending: state.pending,
            attached: state.attached,
            shutdown_requested: state.shutdown_requested,
        }
    }

    pub fn pending(&self) -> usize {
        self.state.lock().pending
    }

    pub fn is_attached(&self) -> bool {
        self.state.lock().attached
    }

    pub fn shutdown_requested(&self) -> bool {
        self.state.lock().shutdown_requested
    }

    fn initiate_shutdown(&self) {
        info!("no pending jobs and no attached caller; requesting worker shutdown");
        self.shutdown.request_shutdown();
    }
}

impl fmt::Debug for JobLifecycleManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobLifecycleManager").field("state", &self.snapshot()).finish()
    }
}

/// Outstanding job handle; unregisters the job on drop.
#[must_use = "dropping the guard immediately unregisters the job"]
pub struct JobGuard {
    manager: Arc<JobLifecycleManager>,
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.manager.unregister();
    }
}

impl fmt::Debug for JobGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobGuard").finish_non_exhaustive()
    }
}
