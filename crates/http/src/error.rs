//! Error handling for the payroll HTTP layer

use thiserror::Error;

/// Failures of a single API round trip.
///
/// Every variant is shown to the user the same way, through
/// [`ApiError::user_message`]; none of them is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP client could not be built from settings.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never completed: connect failure, timeout, or body read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response did not have the expected content type or shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Create a status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Best available message for the user. Server messages pass through
    /// verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
