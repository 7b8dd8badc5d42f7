//! Command handlers behind the `websmsd` subcommands.
//!
//! Every command follows the same lifecycle: attach, dispatch one job,
//! detach, then wait until the worker has drained and shut down.

mod balance;
mod send;

use std::fmt;
use std::time::Instant;

use anyhow::{bail, Context};
use websms_domain::ConnectorKind;

use crate::cli::Command;
use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// What a finished command has to show for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReport {
    Sent,
    Balance { connector: ConnectorKind, display: Option<String> },
}

impl fmt::Display for CommandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "message sent"),
            Self::Balance { connector, display: Some(value) } => {
                write!(f, "{connector} balance: {value}")
            }
            Self::Balance { connector, display: None } => {
                write!(f, "{connector} balance unavailable")
            }
        }
    }
}

/// Run `command` to completion.
///
/// # Errors
/// Fails when the connector id is unknown, the job panicked, or the
/// connector reported an error (details are in the log).
pub async fn execute(context: &AppContext, command: &Command) -> anyhow::Result<CommandReport> {
    let started = Instant::now();

    context.facade.attach();
    let dispatched = match command {
        Command::Send { recipients, body, connector_id } => {
            send::dispatch(context, *connector_id, recipients, body)
        }
        Command::Balance { connector_id } => balance::dispatch(context, *connector_id),
    };
    context.facade.detach();

    let success = match dispatched {
        Ok(handle) => handle.await.context("dispatch task failed")?,
        Err(err) => {
            log_command_execution(command.name(), started.elapsed(), false);
            return Err(err.into());
        }
    };
    context.wait_for_shutdown().await;
    log_command_execution(command.name(), started.elapsed(), success);

    if !success {
        bail!("{} failed; see log for details", command.name());
    }

    Ok(match command {
        Command::Send { .. } => CommandReport::Sent,
        Command::Balance { connector_id } => {
            let connector = ConnectorKind::try_from(*connector_id)?;
            CommandReport::Balance { connector, display: context.balance(connector) }
        }
    })
}
