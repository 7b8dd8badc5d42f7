//! Typed connector registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;
use websms_domain::{ConnectorKind, DispatchError};

use super::ports::RemoteConnector;

/// Maps each [`ConnectorKind`] to the connector that serves it.
#[derive(Default, Clone)]
pub struct ConnectorRegistry {
    connectors: HashMap<ConnectorKind, Arc<dyn RemoteConnector>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with_connector(mut self, connector: Arc<dyn RemoteConnector>) -> Self {
        self.register(connector);
        self
    }

    /// Register `connector` under its own kind, replacing any previous entry.
    pub fn register(&mut self, connector: Arc<dyn RemoteConnector>) {
        let kind = connector.kind();
        if self.connectors.insert(kind, connector).is_some() {
            warn!(connector = %kind, "replacing previously registered connector");
        }
    }

    pub fn get(&self, kind: ConnectorKind) -> Result<Arc<dyn RemoteConnector>, DispatchError> {
        self.connectors
            .get(&kind)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownConnector(kind.to_string()))
    }

    pub fn contains(&self, kind: ConnectorKind) -> bool {
        self.connectors.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorRegistry")
            .field("kinds", &self.connectors.keys().collect::<Vec<_>>())
            .finish()
    }
}
