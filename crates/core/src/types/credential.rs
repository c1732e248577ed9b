//! Login credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Email and password pair submitted to the login endpoint.
///
/// Neither field is validated: both are passed to the server exactly as
/// entered. The password is held as a [`SecretString`] so it never shows up
/// in `Debug` output or logs.
#[derive(Clone)]
pub struct Credentials {
    /// Account email, free-form.
    pub email: String,
    /// Account password.
    pub password: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Build the JSON body for `POST /login`.
    #[must_use]
    pub fn login_body(&self) -> LoginBody<'_> {
        LoginBody {
            email: &self.email,
            password: self.password.expose_secret(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Wire body of a login request: `{"email": ..., "password": ...}`.
#[derive(Serialize)]
pub struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("a@b.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_login_body_shape() {
        let credentials = Credentials::new("a@b.com", "x");
        let json = serde_json::to_value(credentials.login_body()).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }

    #[test]
    fn test_free_form_values_accepted() {
        let credentials = Credentials::new("", "");
        assert_eq!(credentials.email, "");
        assert_eq!(credentials.password.expose_secret(), "");
    }
}
