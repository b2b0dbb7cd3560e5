//! User-visible notifications raised by client operations.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use mindgrow_core::goals::{MilestoneToggle, ToggleDirection};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

/// A short message for the user, shaped like a toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    pub fn goal_added() -> Self {
        Self::new(
            NotificationKind::Success,
            "Goal Added",
            "Your new goal has been created successfully.",
        )
    }

    pub fn journal_entry_added() -> Self {
        Self::new(
            NotificationKind::Success,
            "Journal Entry Added",
            "Your thoughts have been saved.",
        )
    }

    /// Tells the user which way a milestone flipped.
    pub fn milestone_toggled(toggle: &MilestoneToggle, goal_title: &str) -> Self {
        let milestone = toggle.index + 1;
        match toggle.direction {
            ToggleDirection::Completed => Self::new(
                NotificationKind::Success,
                "Milestone Completed",
                format!(
                    "Milestone {} of \"{}\" completed. Progress is now {}%.",
                    milestone, goal_title, toggle.progress
                ),
            ),
            ToggleDirection::Unchecked => Self::new(
                NotificationKind::Info,
                "Milestone Unchecked",
                format!(
                    "Milestone {} of \"{}\" unchecked. Progress is now {}%.",
                    milestone, goal_title, toggle.progress
                ),
            ),
        }
    }
}

/// Receives notifications raised by client services.
///
/// `notify()` must not block; a UI sink typically queues the toast.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Discards every notification.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notification: Notification) {}
}

/// Collects notifications for inspection in tests.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    pub fn clear(&self) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.clear();
        }
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
