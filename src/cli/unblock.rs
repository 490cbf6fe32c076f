//! Entry removal operation.

use std::io::{self, Write};

use blockade::{BlockListManager, BlockadeConfig, DirectoryError, EntryId, UserDirectory, ViewState};

use super::output::write_unblocked;
use super::{connect, notifier};

/// Removes the configured entry from the requester's block list.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidArgument`] when the entry id is blank or
/// not on the block list, plus any configuration or directory failure.
pub async fn run(config: &BlockadeConfig) -> Result<(), DirectoryError> {
    let mut stdout = io::stdout().lock();
    run_with_directory_builder(config, connect, &mut stdout).await
}

/// Unblocks an entry using a custom directory builder.
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
    let entry_id = config
        .unblock
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(EntryId::new)
        .ok_or_else(|| DirectoryError::InvalidArgument {
            argument: "entry id to unblock must not be blank".to_owned(),
        })?;

    let directory = build_directory(config)?;
    let mut manager =
        BlockListManager::new(&directory, ViewState::new()).with_notifier(notifier(config));

    manager.ensure_block_list().await?;
    let entry = manager
        .view()
        .find_entry(&entry_id)
        .cloned()
        .ok_or_else(|| DirectoryError::InvalidArgument {
            argument: format!("entry {entry_id} is not on the block list"),
        })?;

    let removed = manager.unblock_worker(&entry).await?;
    removed.map_or(Ok(()), |unblocked| write_unblocked(writer, &unblocked))
}
