//! Transient user notifications (toasts).

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a notification stays visible unless dismissed, in milliseconds.
pub const DEFAULT_NOTIFICATION_MS: i64 = 3000;

/// Identifier of a raised notification, used to dismiss it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Success,
    Error,
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A closable status message shown to the user for a limited time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub description: Option<String>,
    pub status: NotificationStatus,
    pub raised_at: DateTime<Utc>,
    pub duration: TimeDelta,
}

impl Notification {
    pub const LOGIN_SUCCESSFUL: &'static str = "Login Successful";
    pub const LOGIN_FAILED: &'static str = "Login Failed";
    pub const ORDER_CREATED: &'static str = "Order Created";
    pub const ORDER_CREATION_FAILED: &'static str = "Order Creation Failed";

    /// A success notification raised now.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::raise(title, None, NotificationStatus::Success)
    }

    /// An error notification raised now.
    #[must_use]
    pub fn error(title: impl Into<String>, description: Option<String>) -> Self {
        Self::raise(title, description, NotificationStatus::Error)
    }

    fn raise(
        title: impl Into<String>,
        description: Option<String>,
        status: NotificationStatus,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            description,
            status,
            raised_at: Utc::now(),
            duration: TimeDelta::milliseconds(DEFAULT_NOTIFICATION_MS),
        }
    }

    /// Override how long the notification stays visible.
    #[must_use]
    pub fn with_duration(mut self, duration: TimeDelta) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the notification's lifetime has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.raised_at + self.duration
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status, self.title)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}
