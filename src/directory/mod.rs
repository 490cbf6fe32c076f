//! User directory access for the block-list workflow.
//!
//! This module wraps the platform's REST API: it parses the configured API
//! base, authenticates with a bearer token, and converts worker, block-list,
//! and entry payloads into typed models. Failures are mapped into
//! [`DirectoryError`] variants so callers can report them without seeing
//! transport details.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::DirectoryError;
pub use gateway::{HttpUserDirectory, UserDirectory};
pub use locator::{ApiToken, DirectoryLocator};
pub use models::{
    AccessKind, BlockList, BlockListEntry, BlockListId, DeletedEntry, EntryDraft, EntryId, Worker,
    WorkerId,
};

#[cfg(test)]
pub use gateway::MockUserDirectory;
