//! Gateway configuration from the environment or a config file
//!
//! Environment variables win when both gateway credentials are present.
//! Otherwise the first `websms.*` or `config.*` file found on the probe path
//! is parsed as TOML or JSON, chosen by extension.
//!
//! ## Environment Variables
//! - `WEBSMS_SIPGATE_USER`: Gateway username (required)
//! - `WEBSMS_SIPGATE_PASSWORD`: Gateway password (required)
//! - `WEBSMS_SIPGATE_URL`: XML-RPC endpoint
//! - `WEBSMS_REQUEST_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `WEBSMS_CLIENT_VENDOR`: Vendor string sent in the handshake
//! - `WEBSMS_SENT_LOG`: JSON-lines file receiving sent messages
//!
//! ## Probe Order
//! 1. `./websms.{toml,json}` or `./config.{toml,json}` (current working
//!    directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable and in its two parents

use std::path::{Path, PathBuf};

use websms_domain::{ClientIdentity, Config, GatewayConfig, Result, StoreConfig, WebSmsError};

const ENV_USER: &str = "WEBSMS_SIPGATE_USER";
const ENV_PASSWORD: &str = "WEBSMS_SIPGATE_PASSWORD";
const ENV_URL: &str = "WEBSMS_SIPGATE_URL";
const ENV_TIMEOUT: &str = "WEBSMS_REQUEST_TIMEOUT_SECS";
const ENV_VENDOR: &str = "WEBSMS_CLIENT_VENDOR";
const ENV_SENT_LOG: &str = "WEBSMS_SENT_LOG";

const CONFIG_FILE_NAMES: &[&str] = &["websms.toml", "websms.json", "config.toml", "config.json"];
const PROBE_DIRS: &[&str] = &[".", "..", "../.."];

/// Environment first, then the probed config file.
///
/// The file is consulted only when the gateway credentials are absent from
/// the environment. Once both are set, any other invalid variable is an
/// error rather than a reason to switch to a different account.
///
/// # Errors
/// Returns `WebSmsError::Config` when neither source yields a complete
/// configuration, or when the environment holds credentials next to an
/// invalid setting.
pub fn load() -> Result<Config> {
    if !credentials_in_env() {
        tracing::debug!("Gateway credentials not in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Credentials are required; every other setting falls back to its default.
///
/// # Errors
/// Returns `WebSmsError::Config` if a credential is missing or a value is
/// invalid.
pub fn load_from_env() -> Result<Config> {
    let username = env_var(ENV_USER)?;
    let password = env_var(ENV_PASSWORD)?;

    let mut gateway = GatewayConfig::new(username, password);
    if let Some(endpoint) = optional_env_var(ENV_URL) {
        gateway.endpoint = endpoint;
    }
    gateway.request_timeout_secs = optional_env_var(ENV_TIMEOUT)
        .map(|s| {
            s.trim().parse::<u64>().map_err(|e| {
                WebSmsError::Config(format!("Invalid {ENV_TIMEOUT} '{s}': {e}"))
            })
        })
        .transpose()?;
    validate_timeout(gateway.request_timeout_secs, ENV_TIMEOUT)?;

    let mut client = ClientIdentity::default();
    if let Some(vendor) = optional_env_var(ENV_VENDOR) {
        client.vendor = vendor;
    }

    let store = StoreConfig { sent_log: optional_env_var(ENV_SENT_LOG).map(PathBuf::from) };

    Ok(Config { gateway, client, store })
}

/// Parse `path`, or the first probed config file when `path` is `None`.
///
/// # Errors
/// Returns `WebSmsError::Config` for a missing file, an unknown extension,
/// or content that does not deserialize into [`Config`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WebSmsError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WebSmsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WebSmsError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    let config: Config = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WebSmsError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| WebSmsError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => {
            return Err(WebSmsError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    validate_timeout(config.gateway.request_timeout_secs, "gateway.request_timeout_secs")?;
    Ok(config)
}

/// A zero timeout would fail every gateway call immediately.
fn validate_timeout(timeout_secs: Option<u64>, source: &str) -> Result<()> {
    if timeout_secs == Some(0) {
        return Err(WebSmsError::Config(format!(
            "{source} must be at least 1 second; leave it unset for no timeout"
        )));
    }
    Ok(())
}

/// First existing config file under the working directory (and its two
/// parents), then under the executable's directory (and its two parents).
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots.iter().find_map(|root| probe_root(root))
}

fn probe_root(root: &Path) -> Option<PathBuf> {
    PROBE_DIRS
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| root.join(dir).join(name)))
        .find(|path| path.exists())
}

fn credentials_in_env() -> bool {
    optional_env_var(ENV_USER).is_some() && optional_env_var(ENV_PASSWORD).is_some()
}

fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| {
        WebSmsError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Non-empty value of an optional environment variable.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
