//! Injected interaction surface
//!
//! The frontend supplies a confirmation dialog and a notification toast;
//! the core only depends on these contracts.

use async_trait::async_trait;
use std::time::Duration;

/// Dialog icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIcon {
    Warning,
    Info,
    Success,
    Error,
}

/// Confirmation dialog request
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub icon: DialogIcon,
    pub confirm_label: String,
    /// When set, the dialog must collect a non-empty text input and
    /// re-prompt with a validation message until it gets one.
    pub note_prompt: Option<String>,
}

/// Outcome of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The admin confirmed; `note` carries the text input when one was
    /// requested.
    Confirmed { note: Option<String> },
    /// The admin dismissed the dialog
    Dismissed,
}

/// Confirmation dialog capability
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> Confirmation;
}

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Transient notification shown to the admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// When set, the notification dismisses itself after this delay
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            auto_dismiss: Some(Duration::from_secs(2)),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            auto_dismiss: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
            auto_dismiss: None,
        }
    }
}

/// Notification capability
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}
