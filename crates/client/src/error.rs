//! Errors surfaced by the order desk actions.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

/// Errors from logging in or out.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server refused the credentials.
    #[error("login rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status returned.
        status: StatusCode,
        /// The server's `error` message.
        message: Option<String>,
    },

    /// The login request failed below HTTP.
    #[error("login transport failure: {0}")]
    Transport(ApiError),

    /// A session is already held.
    #[error("already authenticated")]
    AlreadyAuthenticated,

    /// Logout was requested while the session is one-way.
    #[error("logout is disabled for one-way sessions")]
    LogoutDisabled,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status, message } => Self::Rejected { status, message },
            other => Self::Transport(other),
        }
    }
}

/// Errors from submitting an order.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server refused the order.
    #[error("order rejected ({status})")]
    Rejected {
        /// HTTP status returned.
        status: StatusCode,
    },

    /// The order request failed below HTTP.
    #[error("order transport failure: {0}")]
    Transport(ApiError),

    /// No session is held.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status, .. } => Self::Rejected { status },
            other => Self::Transport(other),
        }
    }
}

impl AuthError {
    /// Whether this is a transport failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl SubmitError {
    /// Whether this is a transport failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
