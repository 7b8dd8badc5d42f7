use tokio::task::JoinHandle;
use websms_domain::{ConnectorKind, DispatchError};

use crate::context::AppContext;

pub(super) fn dispatch(
    context: &AppContext,
    connector_id: u16,
) -> Result<JoinHandle<bool>, DispatchError> {
    let kind = ConnectorKind::try_from(connector_id)?;
    context.facade.update_balance(kind)
}
