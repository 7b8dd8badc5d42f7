//! Infrastructure error types.
//!
//! [`RpcError`] is what the XML-RPC client reports. It never leaves this
//! crate: connectors convert it into the domain
//! [`ConnectorError`](websms_domain::ConnectorError) at their boundary.

mod conversions;

use thiserror::Error;

pub use conversions::InfraError;

/// Failure of a single XML-RPC round trip.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RpcError {
    /// The server answered with a `<fault>` response.
    #[error("remote fault {code}: {message}")]
    Fault { code: i32, message: String },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status} {reason}")]
    Http { status: u16, reason: String },

    /// The response body was not a well-formed XML-RPC response.
    #[error("malformed XML-RPC response: {0}")]
    Decode(String),

    /// The request never completed (connect failure, timeout, broken body).
    #[error("{0}")]
    Network(String),
}
