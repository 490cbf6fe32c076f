//! Worker blocking operation.

use std::io::{self, Write};

use blockade::{
    BlockListManager, BlockadeConfig, DirectoryError, UserDirectory, ViewState, Worker, WorkerId,
};

use super::output::write_blocked;
use super::{connect, notifier};

/// Adds the configured worker to the requester's block list.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidArgument`] when the worker id is blank,
/// plus any configuration or directory failure.
pub async fn run(config: &BlockadeConfig) -> Result<(), DirectoryError> {
    let mut stdout = io::stdout().lock();
    run_with_directory_builder(config, connect, &mut stdout).await
}

/// Blocks a worker using a custom directory builder.
///
/// This function is exposed for testing with fake directories.
pub async fn run_with_directory_builder<D, F, W>(
    config: &BlockadeConfig,
    build_directory: F,
    writer: &mut W,
) -> Result<(), DirectoryError>
where
    D: UserDirectory,
    F: FnOnce(&BlockadeConfig) -> Result<D, DirectoryError>,
    W: Write,
{
    let worker = requested_worker(config)?;

    let directory = build_directory(config)?;
    let mut manager =
        BlockListManager::new(&directory, ViewState::new()).with_notifier(notifier(config));

    manager.ensure_block_list().await?;
    if manager.view().is_blocked(&worker.id) {
        tracing::info!(worker = %worker.id, "worker already on the block list");
    }
    manager.select_worker(Some(worker));
    let entry = manager.block_selected().await?;
    write_blocked(writer, &entry)
}

fn requested_worker(config: &BlockadeConfig) -> Result<Worker, DirectoryError> {
    let id = config
        .block
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DirectoryError::InvalidArgument {
            argument: "worker id to block must not be blank".to_owned(),
        })?;

    Ok(Worker {
        id: WorkerId::new(id),
        username: None,
        display_name: None,
    })
}
