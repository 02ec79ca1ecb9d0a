//! Error types for Agave API operations.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// A credential that a request may need in addition to the client id/secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// The `Account-Token` header.
    AccountToken,
    /// The `Project-Id` header.
    ProjectId,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountToken => f.write_str("account token"),
            Self::ProjectId => f.write_str("project id"),
        }
    }
}

/// Errors that can occur during Agave API operations.
#[derive(Debug, Error)]
pub enum AgaveError {
    /// Configuration is missing or incomplete.
    #[error("Agave configuration required: {0}")]
    ConfigMissing(String),

    /// A credential was required but neither passed nor stored on the client.
    #[error("{0} is required: pass it with the request or set it on the client")]
    MissingCredential(Credential),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    RequestTimeout { timeout: Duration },

    /// API request failed with a non-success status.
    #[error("Agave API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// A credential or option could not be sent as a header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The folder hierarchy returned by the server refers back to itself.
    #[error("Folder '{folder_id}' is its own ancestor in the folder tree")]
    FolderCycle { folder_id: String },

    /// The response did not have the shape an operation depends on.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AgaveError {
    /// The HTTP status code, when the server answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => *status_code,
            Self::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Agave operations.
pub type Result<T> = core::result::Result<T, AgaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_field() {
        let err = AgaveError::MissingCredential(Credential::AccountToken);
        assert!(err.to_string().starts_with("account token is required"));

        let err = AgaveError::MissingCredential(Credential::ProjectId);
        assert!(err.to_string().starts_with("project id is required"));
    }

    #[test]
    fn test_timeout_message_carries_duration() {
        let err = AgaveError::RequestTimeout {
            timeout: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }
}
