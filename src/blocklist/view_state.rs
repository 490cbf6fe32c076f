//! View state mirrored from directory responses.
//!
//! The state is transient: it holds what the user typed and picked plus the
//! entries the directory last confirmed. Entries are ordered most recently
//! added first.

use crate::directory::models::{BlockList, BlockListEntry, EntryId, Worker, WorkerId};

/// Progress of the lazy block-list initialisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No retrieval has completed.
    #[default]
    Unloaded,
    /// Retrieval, creation, or the entry load is in flight.
    Loading,
    /// The block list and its entries are available.
    Loaded,
}

/// Search text, selection, and block-list entries shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search_text: Option<String>,
    selected_worker: Option<Worker>,
    block_list: Option<BlockList>,
    entries: Vec<BlockListEntry>,
    load_state: LoadState,
}

impl ViewState {
    /// Creates an empty view state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Worker currently selected for blocking.
    #[must_use]
    pub const fn selected_worker(&self) -> Option<&Worker> {
        self.selected_worker.as_ref()
    }

    /// The requester's block list, once retrieved or created.
    #[must_use]
    pub const fn block_list(&self) -> Option<&BlockList> {
        self.block_list.as_ref()
    }

    /// Entries of the block list, newest first.
    #[must_use]
    pub fn entries(&self) -> &[BlockListEntry] {
        &self.entries
    }

    /// Progress of the block-list initialisation.
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Finds the entry with the given id.
    #[must_use]
    pub fn find_entry(&self, id: &EntryId) -> Option<&BlockListEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Returns true when `worker` appears in any loaded entry.
    #[must_use]
    pub fn is_blocked(&self, worker: &WorkerId) -> bool {
        self.entries.iter().any(|entry| &entry.worker == worker)
    }

    pub(crate) fn set_search_text(&mut self, text: Option<String>) {
        self.search_text = text;
    }

    pub(crate) fn select_worker(&mut self, worker: Option<Worker>) {
        self.selected_worker = worker;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_worker = None;
        self.search_text = None;
    }

    pub(crate) fn set_block_list(&mut self, block_list: BlockList) {
        self.block_list = Some(block_list);
    }

    pub(crate) const fn set_load_state(&mut self, load_state: LoadState) {
        self.load_state = load_state;
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<BlockListEntry>) {
        self.entries = entries;
    }

    pub(crate) fn prepend_entry(&mut self, entry: BlockListEntry) {
        self.entries.insert(0, entry);
    }

    /// Removes the single entry whose id equals `id`.
    ///
    /// Returns `None` and leaves the sequence untouched when no entry matches.
    pub(crate) fn remove_entry(&mut self, id: &EntryId) -> Option<BlockListEntry> {
        let position = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(position))
    }
}
