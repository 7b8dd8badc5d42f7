//! Application context - dependency injection container

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::info;
use websms_core::{
    BalanceBoard, ConnectorRegistry, DispatchFacade, JobCollaborators, JobLifecycleManager,
    MessageStore, PendingIndicator,
};
use websms_domain::{Config, ConnectorKind, Result, WebSmsError};
use websms_infra::{
    InMemoryMessageStore, JsonLinesMessageStore, LoggingIndicator, SipgateConnector,
    TracingStatusSink,
};

/// Process-wide wiring of the dispatcher.
///
/// Exactly one context exists per process. It owns the lifecycle manager and
/// the balance board and hands them to the facade; nothing is reachable
/// through globals.
pub struct AppContext {
    pub config: Config,
    pub facade: DispatchFacade,
    pub balances: Arc<BalanceBoard>,
    pub store: Arc<dyn MessageStore>,
    shutdown: CancellationToken,
}

impl AppContext {
    /// Load configuration and build the context on the current Tokio runtime.
    ///
    /// # Errors
    /// Returns `WebSmsError::Config` for configuration problems and
    /// `WebSmsError::Internal` when called outside a Tokio runtime.
    pub fn new() -> Result<Self> {
        let config = websms_infra::config::load()?;
        let runtime = Handle::try_current()
            .map_err(|err| WebSmsError::Internal(format!("no Tokio runtime available: {err}")))?;
        Self::new_with_config(config, runtime)
    }

    /// Build the context from an explicit configuration.
    ///
    /// Jobs are spawned on `runtime`, so callers on plain threads can use the
    /// facade as long as the runtime stays alive.
    pub fn new_with_config(config: Config, runtime: Handle) -> Result<Self> {
        let shutdown = CancellationToken::new();
        let indicator: Arc<dyn PendingIndicator> = Arc::new(LoggingIndicator::new());
        let lifecycle = Arc::new(JobLifecycleManager::new(indicator, Arc::new(shutdown.clone())));

        let sipgate = SipgateConnector::new(&config.gateway, config.client.clone())?;
        let registry = ConnectorRegistry::new().with_connector(Arc::new(sipgate));

        let store: Arc<dyn MessageStore> = match &config.store.sent_log {
            Some(path) => {
                info!(path = %path.display(), "recording sent messages to file");
                Arc::new(JsonLinesMessageStore::new(path.clone()))
            }
            None => Arc::new(InMemoryMessageStore::new()),
        };
        let balances = Arc::new(BalanceBoard::new());

        let facade = DispatchFacade::new(
            lifecycle,
            registry,
            JobCollaborators {
                store: store.clone(),
                status: Arc::new(TracingStatusSink),
                balances: balances.clone(),
            },
            runtime,
        );

        info!(endpoint = %config.gateway.endpoint, "dispatcher context ready");
        Ok(Self { config, facade, balances, store, shutdown })
    }

    /// Token cancelled once the dispatcher is idle and detached.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Resolve when the lifecycle manager has requested shutdown.
    pub async fn wait_for_shutdown(&self) {
        self.shutdown.cancelled().await;
        info!("dispatcher shut down");
    }

    /// Last known balance of `kind`, formatted for display.
    pub fn balance(&self, kind: ConnectorKind) -> Option<String> {
        self.balances.display(kind)
    }
}
