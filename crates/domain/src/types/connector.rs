//! Connector identifiers

use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;
use crate::impl_domain_enum_conversions;

/// Gateway connector known to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    Sipgate,
}

impl_domain_enum_conversions!(ConnectorKind {
    Sipgate => "sipgate",
});

impl ConnectorKind {
    /// Numeric id used on the IPC surface.
    pub const fn id(self) -> u16 {
        match self {
            Self::Sipgate => 2,
        }
    }

    pub const fn all() -> &'static [ConnectorKind] {
        &[Self::Sipgate]
    }
}

impl TryFrom<u16> for ConnectorKind {
    type Error = DispatchError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.id() == value)
            .ok_or_else(|| DispatchError::UnknownConnector(value.to_string()))
    }
}
