//! WebSMS - background SMS dispatcher
//!
//! Main entry point for the `websmsd` binary.

use anyhow::Context;
use clap::Parser;
use tokio::runtime::{Builder as RuntimeBuilder, Handle};
use tracing::{debug, error, info};
use websms_api::cli::Cli;
use websms_api::utils::logging::error_label;
use websms_api::{execute, AppContext};
use websms_infra::config::{load, load_from_file};
use websms_infra::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Environment first so `.env` values can feed both logging and config.
    let dotenv = dotenvy::dotenv();
    init_tracing(cli.log_format.into())?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env file loaded"),
    }

    let config = match cli.config.clone() {
        Some(path) => load_from_file(Some(path)),
        None => load(),
    }
    .map_err(|err| {
        error!(kind = error_label(&err), error = %err, "configuration failed");
        err
    })?;

    let runtime = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("websms-worker")
        .build()
        .context("failed to start Tokio runtime")?;

    runtime.block_on(async {
        let context = AppContext::new_with_config(config, Handle::current())?;
        let report = execute(&context, &cli.command).await?;
        info!(command = cli.command.name(), %report, "done");
        #[allow(clippy::print_stdout)]
        {
            println!("{report}");
        }
        Ok::<(), anyhow::Error>(())
    })
}
