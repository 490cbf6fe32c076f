//! Block-list workflow over a [`UserDirectory`].
//!
//! [`BlockListManager`] owns the [`ViewState`] and drives it from directory
//! responses: the list is retrieved (and created on first use), entries are
//! loaded wholesale, blocks are prepended, and unblocks remove exactly the
//! entry the directory confirmed. State changes only after the directory
//! answers successfully.

use std::sync::Arc;

use crate::directory::error::DirectoryError;
use crate::directory::gateway::UserDirectory;
use crate::directory::models::{BlockList, BlockListEntry, BlockListId, EntryDraft, Worker};
use crate::notify::{NoopNotifier, Notification, Notifier};

mod view_state;

pub use view_state::{LoadState, ViewState};

/// Binds block-list actions to directory calls and view state.
pub struct BlockListManager<'client, Directory>
where
    Directory: UserDirectory,
{
    directory: &'client Directory,
    view: ViewState,
    notifier: Arc<dyn Notifier>,
}

impl<'client, Directory> BlockListManager<'client, Directory>
where
    Directory: UserDirectory,
{
    /// Create a manager over `directory`, starting from `view`.
    #[must_use]
    pub fn new(directory: &'client Directory, view: ViewState) -> Self {
        Self {
            directory,
            view,
            notifier: Arc::new(NoopNotifier),
        }
    }

    /// Report outcomes through `notifier`.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Consume the manager, returning its view state.
    #[must_use]
    pub fn into_view(self) -> ViewState {
        self.view
    }

    /// Record the text typed into the worker search box.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.view
            .set_search_text((!text.is_empty()).then_some(text));
    }

    /// Select (or with `None`, deselect) the worker to block.
    pub fn select_worker(&mut self, worker: Option<Worker>) {
        self.view.select_worker(worker);
    }

    /// Search the directory for workers matching `query`.
    ///
    /// The directory result is returned unmodified.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the directory.
    pub async fn search_workers(&self, query: &str) -> Result<Vec<Worker>, DirectoryError> {
        tracing::debug!(query, "searching workers");
        self.directory
            .search_workers(query)
            .await
            .inspect_err(|error| self.report("search workers", error))
    }

    /// Retrieve the requester's block list, creating it when absent, then
    /// load its entries.
    ///
    /// The load state moves to [`LoadState::Loading`] for the duration of the
    /// call and ends in [`LoadState::Loaded`], or back in
    /// [`LoadState::Unloaded`] when any step fails.
    ///
    /// # Errors
    ///
    /// Propagates the first directory failure in the retrieve, create, and
    /// load chain.
    pub async fn ensure_block_list(&mut self) -> Result<BlockList, DirectoryError> {
        self.view.set_load_state(LoadState::Loading);
        tracing::debug!("block list loading");

        let result = self.resolve_block_list().await;
        let next = if result.is_ok() {
            LoadState::Loaded
        } else {
            LoadState::Unloaded
        };
        self.view.set_load_state(next);
        tracing::debug!(state = ?next, "block list load finished");
        result
    }

    async fn resolve_block_list(&mut self) -> Result<BlockList, DirectoryError> {
        let retrieved = self
            .directory
            .retrieve_block_list()
            .await
            .inspect_err(|error| self.report("retrieve block list", error))?;

        let block_list = match retrieved {
            Some(existing) => existing,
            None => self.create_block_list().await?,
        };

        self.load_entries(&block_list.id).await?;
        self.view.set_block_list(block_list.clone());
        Ok(block_list)
    }

    async fn create_block_list(&self) -> Result<BlockList, DirectoryError> {
        tracing::debug!("no block list yet, creating one");
        let created = self
            .directory
            .create_block_list()
            .await
            .inspect_err(|error| self.report("create block list", error))?;

        self.notifier.notify(Notification::BlockListCreated {
            block_list: created.id.clone(),
        });
        Ok(created)
    }

    /// Fetch all entries of `block_list`, replacing the local sequence.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the directory; the local sequence is left
    /// unchanged in that case.
    pub async fn load_entries(
        &mut self,
        block_list: &BlockListId,
    ) -> Result<&[BlockListEntry], DirectoryError> {
        let entries = self
            .directory
            .list_entries(block_list)
            .await
            .inspect_err(|error| self.report("load entries", error))?;

        tracing::debug!(count = entries.len(), %block_list, "entries loaded");
        self.view.replace_entries(entries);
        Ok(self.view.entries())
    }

    /// Add `worker` to `block_list`.
    ///
    /// On success the new entry is placed first and the selection and search
    /// text are cleared.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the directory; the view is unchanged.
    pub async fn block_worker(
        &mut self,
        worker: &Worker,
        block_list: &BlockListId,
    ) -> Result<BlockListEntry, DirectoryError> {
        let draft = EntryDraft {
            group: block_list.clone(),
            worker: worker.id.clone(),
        };

        let entry = self
            .directory
            .create_entry(&draft)
            .await
            .inspect_err(|error| self.report("block worker", error))?;

        self.view.prepend_entry(entry.clone());
        self.view.clear_selection();
        self.notifier.notify(Notification::WorkerBlocked {
            worker: entry.worker.clone(),
            entry: entry.id.clone(),
        });
        Ok(entry)
    }

    /// Block the selected worker on the loaded block list.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NoWorkerSelected`] without a selection and
    /// [`DirectoryError::BlockListNotLoaded`] unless the load state is
    /// [`LoadState::Loaded`], in both cases without contacting the directory.
    /// Otherwise propagates directory failures.
    pub async fn block_selected(&mut self) -> Result<BlockListEntry, DirectoryError> {
        let worker = self
            .view
            .selected_worker()
            .cloned()
            .ok_or(DirectoryError::NoWorkerSelected)?;
        let block_list = self
            .view
            .block_list()
            .filter(|_| self.view.load_state() == LoadState::Loaded)
            .map(|list| list.id.clone())
            .ok_or(DirectoryError::BlockListNotLoaded)?;

        self.block_worker(&worker, &block_list).await
    }

    /// Remove `entry` from the block list.
    ///
    /// The local entry whose id matches the id echoed by the directory is
    /// removed and returned. When nothing matches, the sequence is left as
    /// it was and `None` is returned.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the directory; the view is unchanged.
    pub async fn unblock_worker(
        &mut self,
        entry: &BlockListEntry,
    ) -> Result<Option<BlockListEntry>, DirectoryError> {
        let deleted = self
            .directory
            .delete_entry(&entry.id)
            .await
            .inspect_err(|error| self.report("unblock worker", error))?;

        let removed = self.view.remove_entry(&deleted.pk);
        if removed.is_some() {
            self.notifier.notify(Notification::WorkerUnblocked {
                entry: deleted.pk,
            });
        } else {
            tracing::trace!(pk = %deleted.pk, "deleted entry not present locally");
        }
        Ok(removed)
    }

    fn report(&self, operation: &'static str, error: &DirectoryError) {
        tracing::warn!(operation, "block list request failed: {error}");
        self.notifier.notify(Notification::RequestFailed {
            operation,
            message: error.to_string(),
        });
    }
}
