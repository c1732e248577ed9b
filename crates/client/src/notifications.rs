//! Notification queue.
//!
//! Notifications are appended as actions complete and stay until they expire
//! or are dismissed.

use chrono::{DateTime, TimeDelta, Utc};
use order_desk_core::{Notification, NotificationId};

/// Ordered collection of raised notifications.
#[derive(Debug)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    duration: TimeDelta,
}

impl NotificationQueue {
    /// An empty queue whose notifications live for `duration`.
    #[must_use]
    pub const fn new(duration: TimeDelta) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    /// Raise a notification, applying the queue's lifetime.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let notification = notification.with_duration(self.duration);
        let id = notification.id;
        tracing::debug!(%id, title = %notification.title, status = %notification.status, "Notification raised");
        self.items.push(notification);
        id
    }

    /// Close a notification. Returns whether it was present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drop every notification expired at `now`. Returns how many were dropped.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    /// Notifications still visible at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    /// Every notification held, expired or not, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.items
    }
}
