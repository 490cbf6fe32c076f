//! Block list display operation.

use std::io::{self, Write};

use blockade::{BlockListManager, BlockadeConfig, DirectoryError, UserDirectory, ViewState};

use super::output::write_block_list;
use super::{connect, notifier};

/// Loads the requester's block list, creating it if needed, and prints it.
///
/// # Errors
///
/// Returns configuration errors from [`connect`] and any directory failure
/// while retrieving the list or its entries.
pub async fn run(config: &BlockadeConfig) -> Result<(), DirectoryError> {
    let mut stdout = io::stdout().lock();
    run_with_directory_builder(config, connect, &mut stdout).await
}

/// Shows the block list using a custom directory builder.
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
    let directory = build_directory(config)?;
    let mut manager =
        BlockListManager::new(&directory, ViewState::new()).with_notifier(notifier(config));

    let block_list = manager.ensure_block_list().await?;
    write_block_list(writer, &block_list, manager.view().entries())
}
