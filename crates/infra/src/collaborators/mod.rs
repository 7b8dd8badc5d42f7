//! Reference implementations of the dispatcher's collaborator ports.
//!
//! These back the headless daemon. An embedding UI replaces them with its own
//! notification, history, and progress adapters.

mod indicator;
mod status;
mod store;

pub use indicator::LoggingIndicator;
pub use status::{TracingStatusSink, STATUS_TARGET};
pub use store::{InMemoryMessageStore, JsonLinesMessageStore};
