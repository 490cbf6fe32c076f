//! Builders for model fixtures used across unit and behavioural tests.
//!
//! ```
//! use blockade::directory::models::test_support::{entry, worker};
//!
//! let blocked = entry("7", "L1", "W1");
//! assert_eq!(blocked.worker, worker("W1", "ann").id);
//! ```

use super::{AccessKind, BlockList, BlockListEntry, BlockListId, EntryId, Worker, WorkerId};

/// Constructs a worker with the given id and username.
#[must_use]
pub fn worker(id: &str, username: &str) -> Worker {
    Worker {
        id: WorkerId::new(id),
        username: Some(username.to_owned()),
        display_name: None,
    }
}

/// Constructs a global deny list with the given id.
#[must_use]
pub fn block_list(id: &str) -> BlockList {
    BlockList {
        id: BlockListId::new(id),
        kind: AccessKind::Deny,
        is_global: true,
    }
}

/// Constructs an entry linking `worker_id` to `group`.
#[must_use]
pub fn entry(id: &str, group: &str, worker_id: &str) -> BlockListEntry {
    BlockListEntry {
        id: EntryId::new(id),
        group: BlockListId::new(group),
        worker: WorkerId::new(worker_id),
        worker_alias: None,
    }
}

/// Constructs entries with the given ids, all in list `L1`.
#[must_use]
pub fn entries_with_ids(ids: &[&str]) -> Vec<BlockListEntry> {
    ids.iter()
        .map(|id| entry(id, "L1", &format!("W{id}")))
        .collect()
}
