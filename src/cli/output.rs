//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use blockade::{BlockList, BlockListEntry, DirectoryError, Worker};

/// Writes the block list header followed by one line per entry.
pub fn write_block_list<W: Write>(
    writer: &mut W,
    block_list: &BlockList,
    entries: &[BlockListEntry],
) -> Result<(), DirectoryError> {
    writeln!(
        writer,
        "Block list {} ({} workers blocked):",
        block_list.id,
        entries.len()
    )
    .map_err(|e| io_error(&e))?;

    if entries.is_empty() {
        writeln!(writer, "  (no workers blocked)").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for entry in entries {
        let alias = parenthesised(entry.worker_alias.as_deref());
        writeln!(writer, "  entry {}: worker {}{alias}", entry.id, entry.worker)
            .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes search results for `query`.
pub fn write_workers<W: Write>(
    writer: &mut W,
    query: &str,
    workers: &[Worker],
) -> Result<(), DirectoryError> {
    writeln!(writer, "Workers matching \"{query}\":").map_err(|e| io_error(&e))?;

    if workers.is_empty() {
        writeln!(writer, "  (no matches)").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for worker in workers {
        let username = worker.username.as_deref().unwrap_or("-");
        let name = parenthesised(worker.display_name.as_deref());
        writeln!(writer, "  {} {username}{name}", worker.id).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Confirms a new block.
pub fn write_blocked<W: Write>(
    writer: &mut W,
    entry: &BlockListEntry,
) -> Result<(), DirectoryError> {
    writeln!(
        writer,
        "Blocked worker {} (entry {})",
        entry.worker, entry.id
    )
    .map_err(|e| io_error(&e))
}

/// Confirms a removed block.
pub fn write_unblocked<W: Write>(
    writer: &mut W,
    entry: &BlockListEntry,
) -> Result<(), DirectoryError> {
    writeln!(
        writer,
        "Unblocked entry {} (worker {})",
        entry.id, entry.worker
    )
    .map_err(|e| io_error(&e))
}

fn parenthesised(value: Option<&str>) -> String {
    value.map(|text| format!(" ({text})")).unwrap_or_default()
}

fn io_error(error: &io::Error) -> DirectoryError {
    DirectoryError::Io {
        message: error.to_string(),
    }
}
