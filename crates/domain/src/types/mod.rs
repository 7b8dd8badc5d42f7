//! Domain types and models

pub mod balance;
pub mod connector;
pub mod message;
pub mod status;

pub use balance::AccountBalance;
pub use connector::ConnectorKind;
pub use message::{MessageRequest, SendOutcome, StoredMessage};
pub use status::{LogLevel, StatusSignal};
