//! Order API client.
//!
//! Provides the two calls the order desk makes: exchanging credentials for a
//! bearer token, and submitting an order with that token.

use order_desk_core::{Credentials, Order, Session};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ConfigError;

use super::error::ApiError;
use super::types::{LoginErrorResponse, LoginResponse};

/// HTTP client for the order API.
///
/// One request is in flight per call; there are no retries and no timeouts.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client.
    client: Client,
    /// `POST` target for logins.
    login_url: Url,
    /// `POST` target for order submissions.
    orders_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("login_url", &self.login_url.as_str())
            .field("orders_url", &self.orders_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// Endpoints are resolved below the base path, so
    /// `http://host/api` targets `http://host/api/login`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if an endpoint cannot be resolved.
    pub fn new(mut base_url: Url) -> Result<Self, ConfigError> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            login_url: base_url.join("login")?,
            orders_url: base_url.join("orders")?,
        })
    }

    /// The resolved login endpoint.
    #[must_use]
    pub const fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// The resolved orders endpoint.
    #[must_use]
    pub const fn orders_url(&self) -> &Url {
        &self.orders_url
    }

    /// Exchange credentials for an access token.
    ///
    /// Both outcomes are read as JSON. A body that does not parse is a
    /// decode failure whatever the status, so it is handled like a network
    /// failure rather than as a rejection.
    ///
    /// Compatibility: a success body without `accessToken` is refused here.
    /// The legacy page accepted it and stored an undefined token, which made
    /// every later order submission fail.
    ///
    /// # Errors
    ///
    /// - `ApiError::Rejected` with the server's `error` message, if any, on a non-success status
    /// - `ApiError::Transport` if the request fails
    /// - `ApiError::Decode` if the body is not JSON or a success body has no `accessToken`
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<SecretString, ApiError> {
        let response = self
            .client
            .post(self.login_url.clone())
            .json(&credentials.login_body())
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;

            debug!("Login accepted");
            return Ok(SecretString::from(body.access_token));
        }

        let error_body: LoginErrorResponse = response.json().await.map_err(|e| {
            warn!(%status, error = %e, "Login failure body was not JSON");
            ApiError::Decode(e.to_string())
        })?;

        Err(ApiError::Rejected {
            status,
            message: error_body.error,
        })
    }

    /// Submit an order on behalf of `session`.
    ///
    /// Success is decided by status alone; the response body is not read.
    ///
    /// # Errors
    ///
    /// - `ApiError::Rejected` on a non-success status
    /// - `ApiError::Transport` if the request fails
    #[instrument(skip(self, session, order), fields(items = order.items.len()))]
    pub async fn create_order(&self, session: &Session, order: &Order) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.orders_url.clone())
            .bearer_auth(session.token().expose_secret())
            .json(order)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Rejected {
                status,
                message: None,
            });
        }

        debug!(%status, "Order accepted");

        Ok(())
    }
}
