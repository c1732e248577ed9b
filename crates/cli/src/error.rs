//! CLI error type.

use order_desk_client::{AuthError, ConfigError, SubmitError};
use thiserror::Error;

/// Failure of a CLI command. Any of these exits the process with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Login failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Order submission failed: {0}")]
    Submit(#[from] SubmitError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}
