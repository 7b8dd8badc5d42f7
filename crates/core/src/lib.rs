//! # WebSMS Core
//!
//! Business logic of the dispatcher - no HTTP, no wire formats.
//!
//! This crate contains:
//! - The job lifecycle manager that decides when the worker may stop
//! - The dispatch facade, connector registry, and job runner
//! - Port interfaces (traits) for connectors and collaborators
//!
//! ## Architecture Principles
//! - Only depends on `websms-domain`
//! - All gateway and UI access goes through traits
//! - Shared state is owned by explicit objects, never globals

pub mod balance;
pub mod dispatch;
pub mod lifecycle;

// Re-export specific items to avoid ambiguity
pub use balance::BalanceBoard;
pub use dispatch::ports::{MessageStore, RemoteConnector, StatusSink};
pub use dispatch::{ConnectorJob, ConnectorRegistry, DispatchFacade, JobCollaborators};
pub use lifecycle::ports::{PendingIndicator, ShutdownHook};
pub use lifecycle::{JobGuard, JobLifecycleManager, LifecycleSnapshot};
