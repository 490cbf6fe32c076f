//! Error types exposed by the user directory layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the directory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No API base URL was configured.
    #[error("API URL is required")]
    MissingApiUrl,

    /// The API base URL could not be parsed.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing.
    #[error("API token is required")]
    MissingToken,

    /// An unsupported argument or identifier was supplied.
    #[error("invalid argument: {argument}")]
    InvalidArgument {
        /// The value that was rejected.
        argument: String,
    },

    /// The directory rejected the token.
    #[error("directory rejected the token: {message}")]
    Authentication {
        /// Detail returned with the 401/403 response.
        message: String,
    },

    /// The directory refused the request payload.
    #[error("directory rejected the request: {message}")]
    Rejected {
        /// Validation message returned with the 400 response.
        message: String,
    },

    /// The requested record does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Detail returned with the 404 response.
        message: String,
    },

    /// The directory returned an unexpected status or body.
    #[error("directory API error: {message}")]
    Api {
        /// Description of the failure.
        message: String,
    },

    /// Networking failed while calling the directory.
    #[error("network error talking to the directory: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A block was requested without a selected worker.
    #[error("no worker is selected")]
    NoWorkerSelected,

    /// An operation needed the block list before it was loaded.
    #[error("block list has not been loaded")]
    BlockListNotLoaded,
}
