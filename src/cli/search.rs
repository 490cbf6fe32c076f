//! Worker search operation.

use std::io::{self, Write};

use blockade::{BlockListManager, BlockadeConfig, DirectoryError, UserDirectory, ViewState};

use super::output::write_workers;
use super::{connect, notifier};

/// Searches the directory for workers matching the configured text.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidArgument`] when the search text is
/// blank, plus any configuration or directory failure.
pub async fn run(config: &BlockadeConfig) -> Result<(), DirectoryError> {
    let mut stdout = io::stdout().lock();
    run_with_directory_builder(config, connect, &mut stdout).await
}

/// Searches workers using a custom directory builder.
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
    let query = config
        .search
        .as_deref()
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .ok_or_else(|| DirectoryError::InvalidArgument {
            argument: "search text must not be blank".to_owned(),
        })?;

    let directory = build_directory(config)?;
    let mut manager =
        BlockListManager::new(&directory, ViewState::new()).with_notifier(notifier(config));
    manager.set_search_text(query);

    let workers = manager.search_workers(query).await?;
    write_workers(writer, query, &workers)
}
