//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blockade::directory::{
    BlockList, BlockListEntry, BlockListId, DeletedEntry, DirectoryError, EntryDraft, EntryId,
    UserDirectory, Worker,
};

/// Shared log of the calls a [`FakeDirectory`] received.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, call: String) {
        self.0
            .lock()
            .expect("call log mutex should be available")
            .push(call);
    }

    /// Calls recorded so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<String> {
        self.0
            .lock()
            .expect("call log mutex should be available")
            .clone()
    }
}

/// An in-memory directory with preconfigured responses.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    workers: Vec<Worker>,
    block_list: Option<BlockList>,
    created: Option<BlockList>,
    entries: Vec<BlockListEntry>,
    failure: Option<(&'static str, DirectoryError)>,
    calls: CallLog,
}

impl FakeDirectory {
    /// Workers returned by every search.
    #[must_use]
    pub fn with_workers(mut self, workers: Vec<Worker>) -> Self {
        self.workers = workers;
        self
    }

    /// List returned by the retrieve call.
    #[must_use]
    pub fn with_block_list(mut self, block_list: Option<BlockList>) -> Self {
        self.block_list = block_list;
        self
    }

    /// List returned by the create call.
    #[must_use]
    pub fn with_created(mut self, block_list: BlockList) -> Self {
        self.created = Some(block_list);
        self
    }

    /// Entries returned when listing any block list.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<BlockListEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Makes the call named `operation` fail with `error`.
    #[must_use]
    pub fn failing(mut self, operation: &'static str, error: DirectoryError) -> Self {
        self.failure = Some((operation, error));
        self
    }

    /// Handle on the call log that outlives the directory.
    #[must_use]
    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), DirectoryError> {
        self.calls.push(call);
        match &self.failure {
            Some((failing, error)) if *failing == operation => Err(error.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn search_workers(&self, query: &str) -> Result<Vec<Worker>, DirectoryError> {
        self.record("search", format!("search {query}"))?;
        Ok(self.workers.clone())
    }

    async fn create_block_list(&self) -> Result<BlockList, DirectoryError> {
        self.record("create", "create".to_owned())?;
        self.created.clone().ok_or_else(|| DirectoryError::Api {
            message: "no list configured for create".to_owned(),
        })
    }

    async fn retrieve_block_list(&self) -> Result<Option<BlockList>, DirectoryError> {
        self.record("retrieve", "retrieve".to_owned())?;
        Ok(self.block_list.clone())
    }

    async fn list_entries(
        &self,
        block_list: &BlockListId,
    ) -> Result<Vec<BlockListEntry>, DirectoryError> {
        self.record("list", format!("list {block_list}"))?;
        Ok(self.entries.clone())
    }

    async fn create_entry(&self, draft: &EntryDraft) -> Result<BlockListEntry, DirectoryError> {
        self.record("block", format!("block {} {}", draft.group, draft.worker))?;
        Ok(BlockListEntry {
            id: EntryId::new("100"),
            group: draft.group.clone(),
            worker: draft.worker.clone(),
            worker_alias: None,
        })
    }

    async fn delete_entry(&self, entry: &EntryId) -> Result<DeletedEntry, DirectoryError> {
        self.record("delete", format!("delete {entry}"))?;
        Ok(DeletedEntry { pk: entry.clone() })
    }
}

/// Converts captured output into a string.
#[must_use]
pub fn render(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("output should be valid UTF-8")
}
