//! Blockade library crate for managing a requester's worker block list.
//!
//! The library talks to the crowdsourcing platform's user directory to search
//! workers, lazily create the requester's block list, and add or remove
//! block-list entries, mirroring confirmed results into a local view state.

pub mod blocklist;
pub mod config;
pub mod directory;
pub mod notify;

pub use blocklist::{BlockListManager, LoadState, ViewState};
pub use config::{BlockadeConfig, OperationMode};
pub use directory::{
    ApiToken, BlockList, BlockListEntry, BlockListId, DirectoryError, DirectoryLocator, EntryId,
    HttpUserDirectory, UserDirectory, Worker, WorkerId,
};
pub use notify::{NoopNotifier, Notification, Notifier, StderrNotifier};
