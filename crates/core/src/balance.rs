//! Last known account balance per connector.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;
use websms_domain::{AccountBalance, ConnectorKind};

/// Shared store for balances published by balance queries.
///
/// Values are stale until a successful query overwrites them; nothing ever
/// clears an entry.
#[derive(Debug, Default)]
pub struct BalanceBoard {
    balances: RwLock<HashMap<ConnectorKind, AccountBalance>>,
}

impl BalanceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, kind: ConnectorKind, balance: AccountBalance) {
        debug!(connector = %kind, balance = %balance, "publishing account balance");
        self.balances.write().insert(kind, balance);
    }

    pub fn get(&self, kind: ConnectorKind) -> Option<AccountBalance> {
        self.balances.read().get(&kind).copied()
    }

    /// Balance rendered for display, e.g. `"12.50"`.
    pub fn display(&self, kind: ConnectorKind) -> Option<String> {
        self.get(kind).map(|balance| balance.formatted())
    }
}
