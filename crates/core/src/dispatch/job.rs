//! Runs a single connector operation and reports its outcome.
//!
//! The connector only speaks the gateway protocol. Everything that follows a
//! call (persisting the sent message, publishing the balance, telling the UI
//! what happened) lives here so every connector gets the same behaviour.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use websms_domain::{
    ConnectorError, ConnectorKind, LogLevel, MessageRequest, SendOutcome, StatusSignal,
};

use super::ports::{MessageStore, RemoteConnector, StatusSink};
use crate::balance::BalanceBoard;

/// Collaborators shared by every job.
#[derive(Clone)]
pub struct JobCollaborators {
    pub store: Arc<dyn MessageStore>,
    pub status: Arc<dyn StatusSink>,
    pub balances: Arc<BalanceBoard>,
}

/// One connector bound to the job collaborators.
#[derive(Clone)]
pub struct ConnectorJob {
    connector: Arc<dyn RemoteConnector>,
    collaborators: JobCollaborators,
}

impl ConnectorJob {
    pub fn new(connector: Arc<dyn RemoteConnector>, collaborators: JobCollaborators) -> Self {
        Self { connector, collaborators }
    }

    pub fn kind(&self) -> ConnectorKind {
        self.connector.kind()
    }

    /// Send a message described by a dispatch parameter list.
    ///
    /// `params[0]` holds the recipient list, `params[1]` the body. Returns
    /// `true` unless the connector reported an error.
    #[instrument(skip_all, fields(connector = %self.kind()))]
    pub async fn send(&self, params: &[String]) -> bool {
        let request = MessageRequest::from_params(params);

        match self.connector.send_message(&request).await {
            Ok(SendOutcome::Sent) => {
                info!(recipients = request.usable_recipients().count(), "message sent");
                if let Err(err) =
                    self.collaborators.store.persist(request.recipients(), request.body()).await
                {
                    error!(error = %err, "failed to persist sent message");
                    self.collaborators.status.log(LogLevel::Warn, &err.to_string());
                }
                self.collaborators.status.signal(StatusSignal::ComposeReset);
                true
            }
            Ok(SendOutcome::NothingToSend) => {
                warn!(
                    recipients = request.recipients().len(),
                    "no usable recipients; nothing sent"
                );
                true
            }
            Err(err) => {
                self.report_failure("send_message", &err);
                false
            }
        }
    }

    /// Refresh the account balance.
    ///
    /// A non-OK status from the gateway keeps the previous balance and still
    /// emits [`StatusSignal::BalanceRefreshed`].
    #[instrument(skip_all, fields(connector = %self.kind()))]
    pub async fn update_balance(&self) -> bool {
        match self.connector.fetch_balance().await {
            Ok(Some(balance)) => {
                info!(balance = %balance, "account balance updated");
                self.collaborators.balances.publish(self.kind(), balance);
            }
            Ok(None) => {
                debug!("gateway reported non-OK balance status; keeping previous value");
            }
            Err(err) => {
                self.report_failure("fetch_balance", &err);
                return false;
            }
        }

        self.collaborators.status.signal(StatusSignal::BalanceRefreshed);
        true
    }

    fn report_failure(&self, operation: &str, err: &ConnectorError) {
        error!(operation, kind = err.label(), error = %err, "connector call failed");
        self.collaborators.status.log(LogLevel::Error, &err.user_message());
    }
}
