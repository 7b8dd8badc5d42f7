//! Port interfaces driven by the lifecycle manager

use tokio_util::sync::CancellationToken;

/// User-visible "sending" indicator.
///
/// Both calls must be idempotent and must not call back into the lifecycle
/// manager: they run while its lock is held.
pub trait PendingIndicator: Send + Sync {
    /// Show (or keep showing) the indicator.
    fn show(&self);

    /// Remove the indicator if it is visible.
    fn clear(&self);
}

/// Receives the request to tear the background worker down.
pub trait ShutdownHook: Send + Sync {
    fn request_shutdown(&self);
}

impl ShutdownHook for CancellationToken {
    fn request_shutdown(&self) {
        self.cancel();
    }
}
