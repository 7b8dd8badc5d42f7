use tokio::task::JoinHandle;
use tracing::debug;
use websms_domain::DispatchError;

use crate::context::AppContext;

/// Queue a send job. Parameters travel as the IPC-shaped list: recipients
/// first, body second.
pub(super) fn dispatch(
    context: &AppContext,
    connector_id: u16,
    recipients: &str,
    body: &str,
) -> Result<JoinHandle<bool>, DispatchError> {
    debug!(connector_id, body_len = body.chars().count(), "queueing send");
    context.facade.send_message_by_id(connector_id, vec![recipients.to_string(), body.to_string()])
}
