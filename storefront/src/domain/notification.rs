//! Transient notifications shown when an operation fails.
//!
//! No failure is retried or allowed to crash the caller. Presentation code
//! renders the [`Notification`] built from an [`Error`] and lets the user
//! dismiss it.

use serde::{Deserialize, Serialize};

use super::{Error, ErrorCode};

/// Severity used to style a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// The user can correct the input or move on.
    Warning,
    /// The marketplace failed; retrying later may help.
    Error,
}

/// Dismissible message describing a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Severity of the failure.
    pub level: NotificationLevel,
    /// Short heading for the failure category.
    pub title: String,
    /// Detail taken from the underlying [`Error`].
    pub message: String,
    /// Whether the user can close the notification.
    pub dismissible: bool,
}

impl From<&Error> for Notification {
    fn from(error: &Error) -> Self {
        let (level, title) = match error.code() {
            ErrorCode::InvalidRequest => (NotificationLevel::Warning, "Check your input"),
            ErrorCode::NotFound => (NotificationLevel::Warning, "Not found"),
            ErrorCode::NetworkFailure => (NotificationLevel::Error, "Connection problem"),
            ErrorCode::MalformedResponse => (NotificationLevel::Error, "Unexpected response"),
        };
        Self {
            level,
            title: title.to_owned(),
            message: error.message().to_owned(),
            dismissible: true,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
