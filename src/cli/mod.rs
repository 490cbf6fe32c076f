//! CLI operation mode handlers.
//!
//! Each operation mode has its own module:
//! - [`show`]: Print the block list and its entries
//! - [`search`]: Search the directory for workers
//! - [`block`]: Add a worker to the block list
//! - [`unblock`]: Remove an entry from the block list
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use blockade::{
    ApiToken, BlockadeConfig, DirectoryError, DirectoryLocator, HttpUserDirectory, NoopNotifier,
    Notifier, StderrNotifier,
};

pub mod block;
pub mod output;
pub mod search;
pub mod show;
pub mod unblock;

#[cfg(test)]
pub mod test_utils;

/// Builds the REST directory client from configuration.
///
/// # Errors
///
/// Returns [`DirectoryError::MissingApiUrl`] or
/// [`DirectoryError::MissingToken`] when either is absent, and
/// [`DirectoryError::InvalidUrl`] or [`DirectoryError::Configuration`] when
/// the client cannot be built from them.
pub fn connect(config: &BlockadeConfig) -> Result<HttpUserDirectory, DirectoryError> {
    let locator = DirectoryLocator::parse(config.require_api_url()?)?;
    let token = ApiToken::new(config.resolve_token()?)?;
    tracing::debug!(api_base = %locator.api_base(), "connecting to directory");
    HttpUserDirectory::for_token(&token, locator, config.request_timeout())
}

/// Picks the notifier requested by the `notify` flag.
#[must_use]
pub fn notifier(config: &BlockadeConfig) -> Arc<dyn Notifier> {
    if config.notify {
        Arc::new(StderrNotifier)
    } else {
        Arc::new(NoopNotifier)
    }
}
