//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::AUTH_ERROR_MESSAGE;

/// Main error type for WebSMS
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "message")]
pub enum WebSmsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for WebSMS operations
pub type Result<T> = std::result::Result<T, WebSmsError>;

/// Failure of a single remote connector call.
///
/// Every variant is terminal for the call that produced it. Connectors never
/// retry internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// The gateway rejected the configured credentials.
    #[error("authentication rejected: {0}")]
    Auth(String),

    /// The gateway answered with a fault unrelated to authentication.
    #[error("remote fault {code}: {message}")]
    Fault { code: i32, message: String },

    /// The round trip could not be completed.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ConnectorError {
    /// Short text suitable for the user-visible status line.
    ///
    /// Authentication failures map to a fixed message; everything else is
    /// surfaced verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(_) => AUTH_ERROR_MESSAGE.to_string(),
            Self::Fault { message, .. } => message.clone(),
            Self::Transport(message) => message.clone(),
        }
    }

    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth(_) => "auth",
            Self::Fault { .. } => "fault",
            Self::Transport(_) => "transport",
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<ConnectorError> for WebSmsError {
    fn from(value: ConnectorError) -> Self {
        match value {
            ConnectorError::Auth(message) => WebSmsError::Auth(message),
            ConnectorError::Fault { code, message } => {
                WebSmsError::Network(format!("remote fault {code}: {message}"))
            }
            ConnectorError::Transport(message) => WebSmsError::Network(message),
        }
    }
}

/// Result alias for connector calls.
pub type ConnectorResult<T> = std::result::Result<T, ConnectorError>;

/// Errors raised synchronously by the dispatch facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no connector registered for '{0}'")]
    UnknownConnector(String),
}
