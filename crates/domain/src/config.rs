//! Configuration structures
//!
//! Loaded by `websms_infra::config` from the environment or a TOML/JSON file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default XML-RPC endpoint of the sipgate gateway.
pub const DEFAULT_GATEWAY_ENDPOINT: &str = "https://samurai.sipgate.net/RPC2";

/// Client name sent during the identification handshake.
pub const DEFAULT_CLIENT_NAME: &str = "WebSMS.Sipgate";

/// Vendor string sent during the identification handshake.
pub const DEFAULT_CLIENT_VENDOR: &str = "websms";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub client: ClientIdentity,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Connection settings for the remote gateway
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Optional client-side timeout for a single HTTP round trip. Unset means
    /// the call may block indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            username: username.into(),
            password: password.into(),
            request_timeout_secs: None,
        }
    }

    /// Configured timeout; zero counts as unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Values sent in the client-identification handshake
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientIdentity {
    #[serde(default = "default_client_name")]
    pub name: String,
    #[serde(default = "default_client_version")]
    pub version: String,
    #[serde(default = "default_client_vendor")]
    pub vendor: String,
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            name: default_client_name(),
            version: default_client_version(),
            vendor: default_client_vendor(),
        }
    }
}

/// Where sent messages are recorded
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Append-only JSON-lines file. Unset keeps sent messages in memory only.
    #[serde(default)]
    pub sent_log: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_GATEWAY_ENDPOINT.to_string()
}

fn default_client_name() -> String {
    DEFAULT_CLIENT_NAME.to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_client_vendor() -> String {
    DEFAULT_CLIENT_VENDOR.to_string()
}
