//! Status reporting types shared between jobs and the UI sink

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Severity of a status-sink log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl_domain_enum_conversions!(LogLevel {
    Debug => "debug",
    Info => "info",
    Warn => "warn",
    Error => "error",
});

/// UI-facing signal emitted when a job finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSignal {
    /// A message went out; the compose form can be cleared.
    ComposeReset,
    /// A balance query completed; displayed balance should be re-read.
    BalanceRefreshed,
}
