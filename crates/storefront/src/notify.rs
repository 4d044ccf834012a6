//! Transient user notifications.
//!
//! Notifications are the storefront's lightweight feedback overlay: a success
//! message when an item lands in the cart, an error message when checkout is
//! attempted on an empty cart. Each entry auto-dismisses three seconds after
//! creation; callers pass the clock in, so expiry is testable.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// How long a notification stays visible.
pub const DISMISS_AFTER_SECS: i64 = 3;

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS alert class suffix for the overlay markup.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
        }
    }

    /// Icon name for the overlay markup.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }
}

/// A single transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a notification stamped with the current time.
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// When this notification dismisses itself.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(DISMISS_AFTER_SECS)
    }

    /// Whether this notification is still visible at `now`.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

/// Ordered queue of notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a notification, returning its ID.
    ///
    /// Entries that have already expired are dropped on the way in, so a
    /// long-lived queue holds at most the notifications from the last
    /// dismiss window.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let notification = Notification::new(kind, message);
        self.sweep(notification.created_at);
        let id = notification.id;
        self.entries.push(notification);
        id
    }

    /// Notifications still visible at `now`, oldest first.
    pub fn active_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(move |n| n.is_active_at(now))
    }

    /// Drop every notification that has expired by `now`.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|n| n.is_active_at(now));
    }

    /// All queued notifications, expired or not.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Whether the queue holds no notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationKind::Success, "first");
        queue.push(NotificationKind::Error, "second");

        let messages: Vec<&str> = queue
            .entries()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_active_at_respects_dismiss_window() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationKind::Success, "hello");

        let created = queue.entries().first().unwrap().created_at;
        let just_before = created + Duration::milliseconds(2_900);
        let just_after = created + Duration::milliseconds(3_100);

        assert_eq!(queue.active_at(just_before).count(), 1);
        assert_eq!(queue.active_at(just_after).count(), 0);
    }

    #[test]
    fn test_push_drops_already_expired_entries() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationKind::Success, "old");

        // Age the first entry past its dismiss window.
        let first = queue.entries.first_mut().unwrap();
        first.created_at = first.created_at - Duration::seconds(DISMISS_AFTER_SECS + 1);

        queue.push(NotificationKind::Error, "new");
        let messages: Vec<&str> = queue
            .entries()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, ["new"]);
    }

    #[test]
    fn test_sweep_drops_expired_entries() {
        let mut queue = NotificationQueue::new();
        queue.push(NotificationKind::Success, "old");

        let created = queue.entries().first().unwrap().created_at;
        queue.sweep(created + Duration::seconds(DISMISS_AFTER_SECS + 1));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_kind_markup_hints() {
        assert_eq!(NotificationKind::Success.css_class(), "success");
        assert_eq!(NotificationKind::Error.css_class(), "danger");
        assert_eq!(NotificationKind::Error.icon(), "exclamation-circle");
    }
}
