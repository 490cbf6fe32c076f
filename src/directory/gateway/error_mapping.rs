//! Error mapping helpers for the HTTP directory gateway.

use http::StatusCode;

use crate::directory::error::DirectoryError;

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> DirectoryError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        return DirectoryError::Authentication {
            message: format!("{operation} failed: directory returned {status} {message}"),
        };
    }

    match status {
        StatusCode::BAD_REQUEST => DirectoryError::Rejected {
            message: format!("{operation}: {message}"),
        },
        StatusCode::NOT_FOUND => DirectoryError::NotFound {
            message: format!("{operation}: {message}"),
        },
        _ => DirectoryError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        },
    }
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> DirectoryError {
    if error.is_timeout() {
        return DirectoryError::Network {
            message: format!("{operation} timed out: {error}"),
        };
    }

    if error.is_builder() {
        return DirectoryError::Configuration {
            message: format!("{operation} request could not be built: {error}"),
        };
    }

    DirectoryError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> DirectoryError {
    DirectoryError::Api {
        message: format!("{operation} returned an unreadable body: {error}"),
    }
}
