//! User-facing notifications.
//!
//! Every failure the user should hear about goes through one [`Notifier`].
//! Severity decides how loud it is:
//!
//! - [`Severity::Error`]: an explicit user action failed (toggle, delete,
//!   submit, save) or was rejected by validation. Shown as a blocking alert.
//! - [`Severity::Warning`]: a passive load failed. Logged only; the page shows
//!   its own failure text where it has one.
//! - [`Severity::Info`]: success messages from the server. Logged only.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Whether the user must acknowledge the notification
    pub fn is_blocking(self) -> bool {
        self == Severity::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Sends everything to the `log` facade; for hosts without a UI
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => log::info!("{}", notification.message),
            Severity::Warning => log::warn!("{}", notification.message),
            Severity::Error => log::error!("{}", notification.message),
        }
    }
}
