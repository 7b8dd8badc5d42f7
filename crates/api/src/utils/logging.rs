use std::time::Duration;

use tracing::{info, warn};
use websms_domain::WebSmsError;

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier without user data.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `WebSmsError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &WebSmsError) -> &'static str {
    match error {
        WebSmsError::Config(_) => "config",
        WebSmsError::Network(_) => "network",
        WebSmsError::Auth(_) => "auth",
        WebSmsError::InvalidInput(_) => "invalid_input",
        WebSmsError::Internal(_) => "internal",
    }
}
