//! User-facing notifications for block-list outcomes.
//!
//! The manager reports what happened (a worker was blocked, a request
//! failed) through a [`Notifier`] so that the surrounding shell decides how
//! to show it. The CLI prints one line per event to stderr.

use std::fmt;
use std::io;

use crate::directory::models::{BlockListId, EntryId, WorkerId};

/// An outcome worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A block list was created for the requester.
    BlockListCreated {
        /// Identifier of the new list.
        block_list: BlockListId,
    },
    /// A worker was added to the block list.
    WorkerBlocked {
        /// Worker that was blocked.
        worker: WorkerId,
        /// Entry created for the block.
        entry: EntryId,
    },
    /// An entry was removed from the block list.
    WorkerUnblocked {
        /// Entry that was removed.
        entry: EntryId,
    },
    /// A directory request failed.
    RequestFailed {
        /// Operation that was attempted.
        operation: &'static str,
        /// Error detail.
        message: String,
    },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockListCreated { block_list } => {
                write!(f, "Created block list {block_list}")
            }
            Self::WorkerBlocked { worker, entry } => {
                write!(f, "Blocked worker {worker} (entry {entry})")
            }
            Self::WorkerUnblocked { entry } => write!(f, "Unblocked entry {entry}"),
            Self::RequestFailed { operation, message } => {
                write!(f, "Could not {operation}: {message}")
            }
        }
    }
}

/// A sink that can show notifications.
pub trait Notifier: Send + Sync {
    /// Shows a notification.
    fn notify(&self, notification: Notification);
}

/// Notifier that drops all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Writes notifications to stderr, one line each.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        let _ignored = writeln_stderr(&notification.to_string());
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
