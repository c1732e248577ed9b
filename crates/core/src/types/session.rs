//! Session state.
//!
//! A session moves one way, from [`SessionState::Anonymous`] to
//! [`SessionState::Authenticated`], on a successful login. There is no expiry.

use secrecy::SecretString;

/// An authenticated session holding the bearer token issued at login.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
}

impl Session {
    /// Create a session from an issued access token.
    #[must_use]
    pub const fn new(token: SecretString) -> Self {
        Self { token }
    }

    /// The bearer token to attach to authenticated requests.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Authentication state of the order desk.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// No login has succeeded yet.
    #[default]
    Anonymous,
    /// A login succeeded and its token is held.
    Authenticated(Session),
}

impl SessionState {
    /// Whether a login has succeeded.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The active session, if authenticated.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Anonymous => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anonymous => write!(f, "anonymous"),
            Self::Authenticated(_) => write!(f, "authenticated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
        assert_eq!(state.to_string(), "anonymous");
    }

    #[test]
    fn test_authenticated_exposes_token() {
        let state = SessionState::Authenticated(Session::new(SecretString::from("tok123")));
        assert!(state.is_authenticated());
        let session = state.session().expect("authenticated");
        assert_eq!(session.token().expose_secret(), "tok123");
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new(SecretString::from("tok123"));
        assert!(!format!("{session:?}").contains("tok123"));
    }
}
