//! Worker lifecycle: outstanding jobs, attached callers, and shutdown

pub mod manager;
pub mod ports;

pub use manager::{JobGuard, JobLifecycleManager, LifecycleSnapshot};
pub use ports::{PendingIndicator, ShutdownHook};
