use tracing::{debug, error, info, warn};
use websms_core::StatusSink;
use websms_domain::{LogLevel, StatusSignal};

/// Tracing target for user-facing status lines.
pub const STATUS_TARGET: &str = "websms::status";

/// [`StatusSink`] that forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatusSink;

impl StatusSink for TracingStatusSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => debug!(target: STATUS_TARGET, "{message}"),
            LogLevel::Info => info!(target: STATUS_TARGET, "{message}"),
            LogLevel::Warn => warn!(target: STATUS_TARGET, "{message}"),
            LogLevel::Error => error!(target: STATUS_TARGET, "{message}"),
        }
    }

    fn signal(&self, signal: StatusSignal) {
        info!(target: STATUS_TARGET, ?signal, "status signal");
    }
}
