//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.blockade.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `BLOCKADE_API_URL`, `BLOCKADE_TOKEN`, or
//!    legacy `DAEMO_API_TOKEN`
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--token`/`-t`, and the
//!    action flags
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://daemo.example/api/"
//! token = "example-token"
//! request_timeout_seconds = 20
//! notify = true
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::directory::error::DirectoryError;

/// Legacy environment variable consulted when no token is configured.
pub const LEGACY_TOKEN_ENV: &str = "DAEMO_API_TOKEN";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Show the block list and its entries.
    Show,
    /// Search the directory for workers.
    Search,
    /// Block a worker by id.
    Block,
    /// Remove a block-list entry by id.
    Unblock,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `BLOCKADE_API_URL` or `--api-url`: API base URL
/// - `BLOCKADE_TOKEN`, `DAEMO_API_TOKEN`, or `--token`: Bearer token
/// - `BLOCKADE_SEARCH` or `--search`: Worker search text
/// - `BLOCKADE_REQUEST_TIMEOUT_SECONDS`: HTTP timeout
///
/// # Example
///
/// ```no_run
/// use blockade::BlockadeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BlockadeConfig::load().expect("failed to load configuration");
/// let api_url = config.require_api_url().expect("API URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BLOCKADE",
    discovery(
        dotfile_name = ".blockade.toml",
        config_file_name = "blockade.toml",
        app_name = "blockade"
    )
)]
pub struct BlockadeConfig {
    /// Base URL of the platform API (e.g. `https://daemo.example/api/`).
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `BLOCKADE_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Bearer token for API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `BLOCKADE_TOKEN` or `DAEMO_API_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Text to search workers by.
    ///
    /// Can be provided via:
    /// - CLI: `--search <TEXT>` or `-s <TEXT>`
    /// - Environment: `BLOCKADE_SEARCH`
    #[ortho_config(cli_short = 's')]
    pub search: Option<String>,

    /// Worker id to add to the block list.
    ///
    /// Can be provided via:
    /// - CLI: `--block <WORKER_ID>` or `-b <WORKER_ID>`
    #[ortho_config(cli_short = 'b')]
    pub block: Option<String>,

    /// Block-list entry id to remove.
    ///
    /// Can be provided via:
    /// - CLI: `--unblock <ENTRY_ID>` or `-u <ENTRY_ID>`
    #[ortho_config(cli_short = 'u')]
    pub unblock: Option<String>,

    /// HTTP request timeout, in seconds.
    ///
    /// Defaults to 20 seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints block, unblock, and failure notifications to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--notify` / `-n`
    /// - Config file: `notify = true`
    ///
    /// Note: `BLOCKADE_NOTIFY` is not read because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config(cli_short = 'n')]
    pub notify: bool,
}

impl Default for BlockadeConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            token: None,
            search: None,
            block: None,
            unblock: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            notify: false,
        }
    }
}

impl BlockadeConfig {
    /// Resolves the token from configuration or the legacy
    /// `DAEMO_API_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MissingToken`] when no token source provides
    /// a value.
    pub fn resolve_token(&self) -> Result<String, DirectoryError> {
        self.token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_ENV).ok())
            .ok_or(DirectoryError::MissingToken)
    }

    /// Returns the API base URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::MissingApiUrl`] when no URL is configured.
    pub fn require_api_url(&self) -> Result<&str, DirectoryError> {
        self.api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(DirectoryError::MissingApiUrl)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Determines the operation mode based on the action flags.
    ///
    /// `Block` wins over `Unblock`, which wins over `Search`; with no action
    /// flag the block list is shown.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.block.is_some() {
            OperationMode::Block
        } else if self.unblock.is_some() {
            OperationMode::Unblock
        } else if self.search.is_some() {
            OperationMode::Search
        } else {
            OperationMode::Show
        }
    }

    /// Checks that the configured actions can be combined.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Configuration`] when both `block` and
    /// `unblock` are set, or when the timeout is zero.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        if self.block.is_some() && self.unblock.is_some() {
            return Err(DirectoryError::Configuration {
                message: "--block and --unblock cannot be used together".to_owned(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(DirectoryError::Configuration {
                message: "request_timeout_seconds must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
