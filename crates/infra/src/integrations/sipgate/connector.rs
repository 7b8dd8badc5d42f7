use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use websms_core::RemoteConnector;
use websms_domain::{
    AccountBalance, ClientIdentity, ConnectorError, ConnectorKind, ConnectorResult, GatewayConfig,
    MessageRequest, Result, SendOutcome,
};

use super::session::SipgateSession;
use super::{
    BALANCE_STATUS_OK, METHOD_BALANCE_GET, METHOD_SESSION_INITIATE_MULTI, SIP_DOMAIN, TOS_TEXT,
};
use crate::rpc::{RpcValue, XmlRpcTransport};

/// SIP URI for a phone number: every `+` removed, gateway domain appended.
pub fn recipient_uri(recipient: &str) -> String {
    format!("sip:{}@{SIP_DOMAIN}", recipient.replace('+', ""))
}

/// [`RemoteConnector`] for the sipgate gateway.
///
/// Holds configuration and the pooled transport only. Each operation opens
/// its own authenticated session and drops it before returning.
#[derive(Clone)]
pub struct SipgateConnector {
    transport: XmlRpcTransport,
    username: String,
    password: String,
    identity: ClientIdentity,
}

impl SipgateConnector {
    /// # Errors
    /// Returns `WebSmsError::Config` if the endpoint is invalid.
    pub fn new(gateway: &GatewayConfig, identity: ClientIdentity) -> Result<Self> {
        let transport = XmlRpcTransport::new(&gateway.endpoint, gateway.request_timeout())?;

        Ok(Self {
            transport,
            username: gateway.username.clone(),
            password: gateway.password.clone(),
            identity,
        })
    }

    async fn open_session(&self) -> ConnectorResult<SipgateSession> {
        let rpc = self.transport.authenticate(self.username.as_str(), self.password.as_str());
        SipgateSession::open(rpc, &self.identity).await
    }
}

impl fmt::Debug for SipgateConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipgateConnector")
            .field("endpoint", &self.transport.endpoint().as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("identity", &self.identity)
            .finish()
    }
}

#[async_trait]
impl RemoteConnector for SipgateConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Sipgate
    }

    #[instrument(
        skip_all,
        fields(endpoint = %self.transport.endpoint(), recipients = request.recipients().len())
    )]
    async fn send_message(&self, request: &MessageRequest) -> ConnectorResult<SendOutcome> {
        let uris: Vec<RpcValue> =
            request.usable_recipients().map(|recipient| recipient_uri(recipient).into()).collect();
        if uris.is_empty() {
            debug!("no usable recipients; skipping remote session");
            return Ok(SendOutcome::NothingToSend);
        }

        let session = self.open_session().await?;

        let count = uris.len();
        let args = RpcValue::structure([
            ("RemoteUri", RpcValue::Array(uris)),
            ("TOS", RpcValue::from(TOS_TEXT)),
            ("Content", RpcValue::from(request.body())),
        ]);
        session.call(METHOD_SESSION_INITIATE_MULTI, &[args]).await?;

        info!(recipients = count, "gateway accepted message");
        Ok(SendOutcome::Sent)
    }

    #[instrument(skip_all, fields(endpoint = %self.transport.endpoint()))]
    async fn fetch_balance(&self) -> ConnectorResult<Option<AccountBalance>> {
        let session = self.open_session().await?;
        let response = session.call(METHOD_BALANCE_GET, &[]).await?;
        parse_balance(&response)
    }
}

/// Interpret a `BalanceGet` response. A non-OK `StatusCode` is not an error;
/// it just carries no balance.
fn parse_balance(response: &RpcValue) -> ConnectorResult<Option<AccountBalance>> {
    let status = response.member("StatusCode").and_then(RpcValue::as_i32);
    if status != Some(BALANCE_STATUS_OK) {
        debug!(status = ?status, "balance query returned non-OK status");
        return Ok(None);
    }

    let total = response
        .member("CurrentBalance")
        .and_then(|balance| balance.member("TotalIncludingVat"))
        .and_then(RpcValue::as_f64)
        .ok_or_else(|| {
            ConnectorError::Transport(
                "balance response lacks CurrentBalance.TotalIncludingVat".to_string(),
            )
        })?;

    Ok(Some(AccountBalance::new(total)))
}
