//! Port interfaces for gateway connectors and job collaborators

use async_trait::async_trait;
use websms_domain::{
    AccountBalance, ConnectorKind, ConnectorResult, LogLevel, MessageRequest, Result,
    SendOutcome, StatusSignal,
};

/// Protocol logic for one messaging gateway.
///
/// Implementations are stateless between calls: every operation opens its
/// own session, authenticates, and releases the session before returning.
#[async_trait]
pub trait RemoteConnector: Send + Sync {
    /// Registry key for this connector
    fn kind(&self) -> ConnectorKind;

    /// Send `request.body()` to every usable recipient in one batched call.
    ///
    /// Returns [`SendOutcome::NothingToSend`] without contacting the gateway
    /// when no recipient survives filtering.
    async fn send_message(&self, request: &MessageRequest) -> ConnectorResult<SendOutcome>;

    /// Query the account balance.
    ///
    /// `Ok(None)` means the gateway answered with a non-OK status code; the
    /// caller keeps whatever balance it had before.
    async fn fetch_balance(&self) -> ConnectorResult<Option<AccountBalance>>;
}

/// Local history of sent messages
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Record a message that the gateway accepted
    async fn persist(&self, recipients: &[String], body: &str) -> Result<()>;
}

/// User-facing status line and signal channel
pub trait StatusSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn signal(&self, signal: StatusSignal);
}
