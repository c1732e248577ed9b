//! Session manager.
//!
//! Owns the [`SessionState`] and performs the login call. A successful login
//! moves the state from anonymous to authenticated; nothing moves it back
//! except [`SessionManager::reset`], which the order desk only allows when
//! one-way sessions are switched off.

use order_desk_core::{Credentials, Session, SessionState};
use tracing::{info, instrument};

use crate::api::ApiClient;
use crate::error::AuthError;

/// Holds the session token and performs authentication.
#[derive(Debug, Default)]
pub struct SessionManager {
    state: SessionState,
}

impl SessionManager {
    /// A manager in the anonymous state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a login has succeeded.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// Authenticate with `credentials` and capture the issued token.
    ///
    /// On failure the state is left untouched, so no token is stored.
    ///
    /// # Errors
    ///
    /// - `AuthError::AlreadyAuthenticated` if a session is already held (no request is sent)
    /// - `AuthError::Rejected` if the server refuses the credentials
    /// - `AuthError::Transport` if the request fails
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(
        &mut self,
        api: &ApiClient,
        credentials: &Credentials,
    ) -> Result<Session, AuthError> {
        if self.state.is_authenticated() {
            return Err(AuthError::AlreadyAuthenticated);
        }

        let session = Session::new(api.login(credentials).await?);
        self.state = SessionState::Authenticated(session.clone());
        info!("Session authenticated");

        Ok(session)
    }

    /// Drop the session and return to anonymous.
    pub fn reset(&mut self) {
        if self.state.is_authenticated() {
            info!("Session discarded");
        }
        self.state = SessionState::Anonymous;
    }
}
