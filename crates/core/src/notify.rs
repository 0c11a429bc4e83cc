//! User-facing notifications

use crate::config::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient message for the toast area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// `None` keeps the toast until it is dismissed
    pub timeout: Option<Duration>,
    pub dismiss_on_click: bool,
}

impl Notification {
    /// Default lifetime of a toast
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timeout: Some(Self::DEFAULT_TIMEOUT),
            dismiss_on_click: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Stays on screen and ignores clicks
    #[must_use]
    pub const fn sticky(mut self) -> Self {
        self.timeout = None;
        self.dismiss_on_click = false;
        self
    }
}

/// How the session-expired warning is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryNotice {
    /// Indefinite warning that a click does not dismiss
    Sticky,
    /// Warning that disappears on its own
    Timed(Duration),
}

impl ExpiryNotice {
    pub const MESSAGE: &'static str = "Your session has expired. Please log in again.";

    pub fn notification(self) -> Notification {
        let notification = Notification::warning(Self::MESSAGE);
        match self {
            Self::Sticky => notification.sticky(),
            Self::Timed(timeout) => notification.with_timeout(timeout),
        }
    }
}

impl Default for ExpiryNotice {
    fn default() -> Self {
        Self::Timed(Duration::from_millis(u64::from(
            AuthConfig::EXPIRY_NOTICE_MS,
        )))
    }
}
