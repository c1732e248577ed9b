//! Error types for the order API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the order API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, I/O).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body that could not be read as the expected JSON.
    #[error("unreadable response body: {0}")]
    Decode(String),

    /// The server answered with a non-success status.
    #[error("server rejected request with status {status}")]
    Rejected {
        /// HTTP status returned.
        status: StatusCode,
        /// Server-provided message, when the body carried one.
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: Some("nope".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "server rejected request with status 400 Bad Request"
        );
    }

    #[test]
    fn test_decode_display() {
        assert_eq!(
            ApiError::Decode("eof".to_string()).to_string(),
            "unreadable response body: eof"
        );
    }
}
