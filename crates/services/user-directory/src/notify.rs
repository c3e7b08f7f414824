//! Operator notifications.
//!
//! The directory reports the outcome of every add, update and delete to a
//! [`Notifier`]. Delivery is fire-and-forget: nothing depends on it.

use common::AppError;
use tracing::{error, info};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outcome severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Error notice carrying the error's user-facing message
    pub fn from_error(err: &AppError) -> Self {
        Self::error(err.user_message())
    }
}

/// Notification sink.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Emits notices as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(target: "notice", "{}", notice.message),
            NoticeLevel::Error => error!(target: "notice", "{}", notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notice_uses_user_message() {
        let notice = Notice::from_error(&AppError::storage("quota exceeded"));

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Changes may not be saved after a restart");
    }
}
