//! Conversions from external infrastructure errors into domain errors.

use quick_xml::Error as XmlError;
use reqwest::Error as HttpError;
use websms_domain::constants::AUTH_FAULT_CODE;
use websms_domain::{ConnectorError, WebSmsError};

use super::RpcError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WebSmsError);

impl From<InfraError> for WebSmsError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WebSmsError> for InfraError {
    fn from(value: WebSmsError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RpcError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for RpcError {
    fn from(err: HttpError) -> Self {
        if err.is_timeout() {
            return RpcError::Network("HTTP request timed out".into());
        }

        if err.is_connect() {
            return RpcError::Network(format!("HTTP connection failure: {err}"));
        }

        if let Some(status) = err.status() {
            return RpcError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        if err.is_decode() || err.is_body() {
            return RpcError::Decode(err.to_string());
        }

        RpcError::Network(err.to_string())
    }
}

/// Client construction failures are configuration problems.
impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        InfraError(WebSmsError::Config(format!("failed to build HTTP client: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* quick_xml::Error → RpcError */
/* -------------------------------------------------------------------------- */

impl From<XmlError> for RpcError {
    fn from(err: XmlError) -> Self {
        RpcError::Decode(err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* RpcError → ConnectorError */
/* -------------------------------------------------------------------------- */

impl From<RpcError> for ConnectorError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::Fault { code, message } if code == AUTH_FAULT_CODE => {
                ConnectorError::Auth(message)
            }
            RpcError::Fault { code, message } => ConnectorError::Fault { code, message },
            RpcError::Http { status, reason } if i32::from(status) == AUTH_FAULT_CODE => {
                ConnectorError::Auth(format!("HTTP {status} {reason}"))
            }
            other @ RpcError::Http { .. } => ConnectorError::Transport(other.to_string()),
            other @ RpcError::Decode(_) => ConnectorError::Transport(other.to_string()),
            RpcError::Network(message) => ConnectorError::Transport(message),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
