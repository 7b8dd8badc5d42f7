use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;
use websms_core::PendingIndicator;

/// [`PendingIndicator`] that logs visibility changes.
///
/// Repeated `show`/`clear` calls are idempotent and only the transitions are
/// logged.
#[derive(Debug, Default)]
pub struct LoggingIndicator {
    visible: AtomicBool,
}

impl LoggingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl PendingIndicator for LoggingIndicator {
    fn show(&self) {
        if !self.visible.swap(true, Ordering::SeqCst) {
            info!(target: "websms::indicator", "work pending");
        }
    }

    fn clear(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            info!(target: "websms::indicator", "idle");
        }
    }
}
