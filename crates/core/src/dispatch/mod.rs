//! Dispatching connector work off the caller's task
//!
//! - [`facade`]: entry point used by external callers
//! - [`registry`]: typed lookup from [`ConnectorKind`] to a connector
//! - [`job`]: runs one connector operation and reports its outcome
//! - [`ports`]: connector and collaborator traits
//!
//! [`ConnectorKind`]: websms_domain::ConnectorKind

pub mod facade;
pub mod job;
pub mod ports;
pub mod registry;

pub use facade::DispatchFacade;
pub use job::{ConnectorJob, JobCollaborators};
pub use ports::{MessageStore, RemoteConnector, StatusSink};
pub use registry::ConnectorRegistry;
