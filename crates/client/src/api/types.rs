//! Wire types for the order API responses.

use serde::Deserialize;

/// Success body of `POST /login`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Failure body of `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
