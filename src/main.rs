//! Blockade CLI entrypoint for managing a requester's worker block list.

use std::io::{self, Write};
use std::process::ExitCode;

use blockade::{BlockadeConfig, DirectoryError, OperationMode};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "BLOCKADE_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ignored = writeln!(io::stderr().lock(), "{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DirectoryError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    tracing::debug!(?mode, "dispatching operation");
    match mode {
        OperationMode::Show => cli::show::run(&config).await,
        OperationMode::Search => cli::search::run(&config).await,
        OperationMode::Block => cli::block::run(&config).await,
        OperationMode::Unblock => cli::unblock::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DirectoryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<BlockadeConfig, DirectoryError> {
    BlockadeConfig::load().map_err(|error| DirectoryError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber filtered by `BLOCKADE_LOG`, defaulting to
/// warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
