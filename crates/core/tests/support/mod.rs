//! Shared test helpers for `websms-core` integration tests.
//!
//! Every fake appends to one [`EventLog`] so tests can assert the order in
//! which the lifecycle manager, the connector, and the collaborators were
//! driven.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use websms_core::{
    BalanceBoard, ConnectorRegistry, DispatchFacade, JobCollaborators, JobLifecycleManager,
    MessageStore, PendingIndicator, RemoteConnector, ShutdownHook, StatusSink,
};
use websms_domain::{
    AccountBalance, ConnectorError, ConnectorKind, ConnectorResult, LogLevel, MessageRequest,
    Result as DomainResult, SendOutcome, StatusSignal,
};

/// Observable side effect, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    IndicatorShown,
    IndicatorCleared,
    RemoteSend(Vec<String>),
    RemoteBalance,
    Persisted(Vec<String>, String),
    Status(LogLevel, String),
    Signal(StatusSignal),
    Shutdown,
}

#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.0.lock().iter().filter(|event| predicate(event)).count()
    }
}

/// Connector returning pre-scripted answers.
pub struct ScriptedConnector {
    log: EventLog,
    send: Mutex<ConnectorResult<SendOutcome>>,
    balance: Mutex<ConnectorResult<Option<AccountBalance>>>,
    pub send_calls: AtomicUsize,
}

impl ScriptedConnector {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            send: Mutex::new(Ok(SendOutcome::Sent)),
            balance: Mutex::new(Ok(None)),
            send_calls: AtomicUsize::new(0),
        }
    }

    pub fn fail_sends_with(&self, error: ConnectorError) {
        *self.send.lock() = Err(error);
    }

    pub fn answer_balance_with(&self, result: ConnectorResult<Option<AccountBalance>>) {
        *self.balance.lock() = result;
    }
}

#[async_trait]
impl RemoteConnector for ScriptedConnector {
    fn kind(&self) -> ConnectorKind {
        ConnectorKind::Sipgate
    }

    async fn send_message(&self, request: &MessageRequest) -> ConnectorResult<SendOutcome> {
        let usable: Vec<String> = request.usable_recipients().map(str::to_string).collect();
        if usable.is_empty() {
            return Ok(SendOutcome::NothingToSend);
        }
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.log.push(Event::RemoteSend(usable));
        self.send.lock().clone()
    }

    async fn fetch_balance(&self) -> ConnectorResult<Option<AccountBalance>> {
        self.log.push(Event::RemoteBalance);
        self.balance.lock().clone()
    }
}

pub struct RecordingCollaborator {
    log: EventLog,
}

#[async_trait]
impl MessageStore for RecordingCollaborator {
    async fn persist(&self, recipients: &[String], body: &str) -> DomainResult<()> {
        self.log.push(Event::Persisted(recipients.to_vec(), body.to_string()));
        Ok(())
    }
}

impl StatusSink for RecordingCollaborator {
    fn log(&self, level: LogLevel, message: &str) {
        self.log.push(Event::Status(level, message.to_string()));
    }

    fn signal(&self, signal: StatusSignal) {
        self.log.push(Event::Signal(signal));
    }
}

impl PendingIndicator for RecordingCollaborator {
    fn show(&self) {
        self.log.push(Event::IndicatorShown);
    }

    fn clear(&self) {
        self.log.push(Event::IndicatorCleared);
    }
}

impl ShutdownHook for RecordingCollaborator {
    fn request_shutdown(&self) {
        self.log.push(Event::Shutdown);
    }
}

/// Fully wired facade over a [`ScriptedConnector`].
pub struct Dispatcher {
    pub facade: DispatchFacade,
    pub connector: Arc<ScriptedConnector>,
    pub balances: Arc<BalanceBoard>,
    pub log: EventLog,
}

impl Dispatcher {
    pub fn new() -> Self {
        let log = EventLog::default();
        let collaborator = Arc::new(RecordingCollaborator { log: log.clone() });
        let connector = Arc::new(ScriptedConnector::new(log.clone()));
        let balances = Arc::new(BalanceBoard::new());

        let lifecycle =
            Arc::new(JobLifecycleManager::new(collaborator.clone(), collaborator.clone()));
        let facade = DispatchFacade::new(
            lifecycle,
            ConnectorRegistry::new().with_connector(connector.clone()),
            JobCollaborators {
                store: collaborator.clone(),
                status: collaborator,
                balances: balances.clone(),
            },
            Handle::current(),
        );

        Self { facade, connector, balances, log }
    }
}

pub fn params(recipients: &str, body: &str) -> Vec<String> {
    vec![recipients.to_string(), body.to_string()]
}
