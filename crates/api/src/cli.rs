use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use websms_domain::ConnectorKind;
use websms_infra::LogFormat;

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "websmsd")]
#[command(version, about = "WebSMS - background SMS dispatcher")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (TOML or JSON); defaults to environment, then probing
    #[arg(long, global = true, env = "WEBSMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, env = "WEBSMS_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a text message
    Send {
        /// Recipients separated by ',' or ';'
        recipients: String,

        /// Message body
        body: String,

        /// Numeric connector id
        #[arg(long, default_value_t = ConnectorKind::Sipgate.id())]
        connector_id: u16,
    },

    /// Refresh and print the account balance
    Balance {
        /// Numeric connector id
        #[arg(long, default_value_t = ConnectorKind::Sipgate.id())]
        connector_id: u16,
    },
}

impl Command {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Send { .. } => "send",
            Self::Balance { .. } => "balance",
        }
    }
}
