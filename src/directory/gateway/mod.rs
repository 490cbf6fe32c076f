//! Gateways for talking to the user directory.
//!
//! [`UserDirectory`] is the seam between the block-list workflow and the
//! remote service: every call returns the unwrapped payload or a
//! [`DirectoryError`]. [`HttpUserDirectory`] implements it over the REST API.

mod error_mapping;
mod http_utils;
mod rest;

pub use rest::HttpUserDirectory;

use async_trait::async_trait;

use crate::directory::error::DirectoryError;
use crate::directory::models::{
    BlockList, BlockListEntry, BlockListId, DeletedEntry, EntryDraft, EntryId, Worker,
};

/// Remote directory holding workers and the requester's block list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Search listed workers matching `query`.
    async fn search_workers(&self, query: &str) -> Result<Vec<Worker>, DirectoryError>;

    /// Create the requester's block list.
    async fn create_block_list(&self) -> Result<BlockList, DirectoryError>;

    /// Fetch the requester's block list, or `None` if it does not exist yet.
    async fn retrieve_block_list(&self) -> Result<Option<BlockList>, DirectoryError>;

    /// Fetch every entry of the given block list.
    async fn list_entries(
        &self,
        block_list: &BlockListId,
    ) -> Result<Vec<BlockListEntry>, DirectoryError>;

    /// Add a worker to a block list.
    async fn create_entry(&self, draft: &EntryDraft) -> Result<BlockListEntry, DirectoryError>;

    /// Remove an entry, returning the echoed identifier.
    async fn delete_entry(&self, entry: &EntryId) -> Result<DeletedEntry, DirectoryError>;
}
