//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_DESK_API_URL` - API base URL (default: <https://backengine-mft9.fly.dev>)
//! - `ORDER_DESK_SILENT_TRANSPORT_FAILURES` - Only log network failures (default: true)
//! - `ORDER_DESK_ONE_WAY_SESSION` - Disable logout (default: true)
//! - `ORDER_DESK_NOTIFICATION_MS` - Notification lifetime in milliseconds (default: 3000)

use chrono::TimeDelta;
use order_desk_core::types::notification::DEFAULT_NOTIFICATION_MS;
use thiserror::Error;
use url::Url;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://backengine-mft9.fly.dev";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Legacy behavior toggles.
///
/// Both default to `true`: network failures are only logged, and a session
/// can never be ended without restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compatibility {
    /// Log transport failures without raising a notification.
    pub silent_transport_failures: bool,
    /// Refuse `logout`; the session ends only when the process exits.
    pub one_way_session: bool,
}

impl Compatibility {
    /// Settings with both legacy behaviors switched off.
    #[must_use]
    pub const fn corrected() -> Self {
        Self {
            silent_transport_failures: false,
            one_way_session: false,
        }
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Self {
            silent_transport_failures: true,
            one_way_session: true,
        }
    }
}

/// Order desk client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the order API.
    pub api_url: Url,
    /// Legacy behavior toggles.
    pub compatibility: Compatibility,
    /// How long notifications stay visible.
    pub notification_duration: TimeDelta,
}

impl ClientConfig {
    /// Configuration for `api_url` with every other setting at its default.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            compatibility: Compatibility::default(),
            notification_duration: TimeDelta::milliseconds(DEFAULT_NOTIFICATION_MS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(get_optional_env)
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = parse_api_url(
            &lookup("ORDER_DESK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;

        let defaults = Compatibility::default();
        let compatibility = Compatibility {
            silent_transport_failures: lookup_bool(
                &lookup,
                "ORDER_DESK_SILENT_TRANSPORT_FAILURES",
                defaults.silent_transport_failures,
            )?,
            one_way_session: lookup_bool(
                &lookup,
                "ORDER_DESK_ONE_WAY_SESSION",
                defaults.one_way_session,
            )?,
        };

        let notification_ms = match lookup("ORDER_DESK_NOTIFICATION_MS") {
            Some(value) => i64::from(value.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_DESK_NOTIFICATION_MS".to_string(), e.to_string())
            })?),
            None => DEFAULT_NOTIFICATION_MS,
        };

        Ok(Self {
            api_url,
            compatibility,
            notification_duration: TimeDelta::milliseconds(notification_ms),
        })
    }
}

/// Parse and check an API base URL.
///
/// # Errors
///
/// Returns `ConfigError` if the URL does not parse or is not `http(s)`.
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            "ORDER_DESK_API_URL".to_string(),
            format!("unsupported scheme {other:?}"),
        )),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a boolean flag, accepting `true/false`, `1/0`, `yes/no` and `on/off`.
fn lookup_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {value:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).expect("defaults load");
        assert_eq!(config.api_url.as_str(), "https://backengine-mft9.fly.dev/");
        assert_eq!(config.compatibility, Compatibility::default());
        assert!(config.compatibility.silent_transport_failures);
        assert!(config.compatibility.one_way_session);
        assert_eq!(config.notification_duration, TimeDelta::milliseconds(3000));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ORDER_DESK_API_URL", "http://127.0.0.1:8080/api"),
            ("ORDER_DESK_SILENT_TRANSPORT_FAILURES", "false"),
            ("ORDER_DESK_ONE_WAY_SESSION", "0"),
            ("ORDER_DESK_NOTIFICATION_MS", "500"),
        ])
        .expect("overrides load");

        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:8080/api");
        assert_eq!(config.compatibility, Compatibility::corrected());
        assert_eq!(config.notification_duration, TimeDelta::milliseconds(500));
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[("ORDER_DESK_ONE_WAY_SESSION", "maybe")]).expect_err("invalid bool");
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "ORDER_DESK_ONE_WAY_SESSION"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            load(&[("ORDER_DESK_API_URL", "not a url")]),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            load(&[("ORDER_DESK_API_URL", "ftp://example.com")]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }

    #[test]
    fn test_invalid_notification_ms() {
        assert!(matches!(
            load(&[("ORDER_DESK_NOTIFICATION_MS", "-5")]),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }
}
