//! Data models representing workers, block lists, and block-list entries.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain types.

use serde::{Deserialize, Serialize};

mod ids;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use ids::{BlockListId, EntryId, WorkerId};

/// A directory-listed worker who can be blocked from a requester's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    /// Worker identifier.
    pub id: WorkerId,
    /// Account username, if the directory exposes it.
    pub username: Option<String>,
    /// Public alias or full name for display.
    pub display_name: Option<String>,
}

impl Worker {
    /// Returns the best available label for showing this worker.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

/// Kind of access-control group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Members are denied access (a block list).
    #[default]
    Deny,
    /// Members are explicitly allowed.
    Allow,
}

impl AccessKind {
    /// Wire label used in query strings and request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deny => "deny",
            Self::Allow => "allow",
        }
    }
}

/// The requester's block list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    /// Block list identifier.
    pub id: BlockListId,
    /// Access kind of the underlying group.
    pub kind: AccessKind,
    /// Whether the list applies to all of the requester's projects.
    pub is_global: bool,
}

/// One (block list, worker) membership record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockListEntry {
    /// Entry identifier.
    pub id: EntryId,
    /// Owning block list.
    pub group: BlockListId,
    /// Blocked worker.
    pub worker: WorkerId,
    /// Worker alias when the directory includes one.
    pub worker_alias: Option<String>,
}

/// Payload submitted to create a block-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryDraft {
    /// Target block list.
    pub group: BlockListId,
    /// Worker to block.
    pub worker: WorkerId,
}

/// Confirmation returned after deleting an entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletedEntry {
    /// Identifier of the deleted entry.
    pub pk: EntryId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiWorker {
    id: WorkerId,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

impl From<ApiWorker> for Worker {
    fn from(value: ApiWorker) -> Self {
        let full_name = match (non_blank(value.first_name), non_blank(value.last_name)) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first),
            (None, Some(last)) => Some(last),
            (None, None) => None,
        };

        Self {
            id: value.id,
            username: non_blank(value.username),
            display_name: non_blank(value.alias).or(full_name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiBlockList {
    id: BlockListId,
    #[serde(rename = "type", default)]
    kind: Option<AccessKind>,
    #[serde(default)]
    is_global: Option<bool>,
}

impl From<ApiBlockList> for BlockList {
    fn from(value: ApiBlockList) -> Self {
        Self {
            id: value.id,
            kind: value.kind.unwrap_or_default(),
            is_global: value.is_global.unwrap_or(true),
        }
    }
}

/// Entries reference the worker either by id or as a nested object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiWorkerRef {
    Id(WorkerId),
    Nested {
        id: WorkerId,
        #[serde(default)]
        alias: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEntry {
    id: EntryId,
    group: BlockListId,
    worker: ApiWorkerRef,
    #[serde(default)]
    worker_alias: Option<String>,
}

impl From<ApiEntry> for BlockListEntry {
    fn from(value: ApiEntry) -> Self {
        let (worker, nested_alias) = match value.worker {
            ApiWorkerRef::Id(id) => (id, None),
            ApiWorkerRef::Nested { id, alias } => (id, alias),
        };

        Self {
            id: value.id,
            group: value.group,
            worker,
            worker_alias: non_blank(value.worker_alias).or_else(|| non_blank(nested_alias)),
        }
    }
}
