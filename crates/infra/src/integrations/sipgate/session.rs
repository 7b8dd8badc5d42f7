//! Per-operation gateway session

use tracing::debug;
use websms_domain::{ClientIdentity, ConnectorResult};

use super::METHOD_CLIENT_IDENTIFY;
use crate::rpc::{RpcValue, XmlRpcClient};

/// Authenticated, identified conversation with the gateway.
///
/// Opened at the start of one connector operation and owned by it; dropping
/// it releases the credentials it carries. Never cached or shared.
pub(super) struct SipgateSession {
    rpc: XmlRpcClient,
}

impl SipgateSession {
    /// Run the identification handshake over `rpc`.
    ///
    /// A handshake failure aborts the caller's operation with the same
    /// classification as the main call.
    pub(super) async fn open(
        rpc: XmlRpcClient,
        identity: &ClientIdentity,
    ) -> ConnectorResult<Self> {
        let args = RpcValue::structure([
            ("ClientName", RpcValue::from(identity.name.as_str())),
            ("ClientVersion", RpcValue::from(identity.version.as_str())),
            ("ClientVendor", RpcValue::from(identity.vendor.as_str())),
        ]);

        rpc.call(METHOD_CLIENT_IDENTIFY, &[args]).await?;
        debug!(client = %identity.name, "session opened");
        Ok(Self { rpc })
    }

    pub(super) async fn call(
        &self,
        method: &str,
        params: &[RpcValue],
    ) -> ConnectorResult<RpcValue> {
        Ok(self.rpc.call(method, params).await?)
    }
}

impl Drop for SipgateSession {
    fn drop(&mut self) {
        debug!("session closed");
    }
}
