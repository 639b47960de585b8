//! Notification system error types.
//!
//! Delivery failures never stop the timer; the shell logs them and falls back
//! to the terminal bell.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The desktop notification command could not be found.
    #[error("notification command not found: {0}")]
    CommandNotFound(String),

    /// The notification command ran but reported a failure.
    #[error("failed to send notification: {0}")]
    SendFailed(String),

    /// The notification command did not finish in time.
    #[error("notification timed out after {0}s")]
    Timeout(u64),

    /// Invalid input provided to the notification system.
    #[error("invalid notification input: {0}")]
    InvalidInput(String),

    /// No notification backend is available on this host.
    #[error("notifications are not available")]
    NotAvailable,
}

impl NotificationError {
    /// Returns true if no backend exists to deliver the notification.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::CommandNotFound(_) | Self::NotAvailable)
    }

    /// Returns true if the notification should be shown on the terminal instead.
    #[must_use]
    pub fn should_fallback_to_terminal(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotificationError::Timeout(5);
        assert_eq!(err.to_string(), "notification timed out after 5s");

        let err = NotificationError::CommandNotFound("notify-send".to_string());
        assert!(err.to_string().contains("notify-send"));
    }

    #[test]
    fn test_is_unavailable() {
        assert!(NotificationError::NotAvailable.is_unavailable());
        assert!(NotificationError::CommandNotFound("x".into()).is_unavailable());
        assert!(!NotificationError::Timeout(5).is_unavailable());
    }

    #[test]
    fn test_should_fallback_to_terminal() {
        assert!(NotificationError::SendFailed("x".into()).should_fallback_to_terminal());
        assert!(NotificationError::Timeout(5).should_fallback_to_terminal());
        assert!(!NotificationError::InvalidInput("x".into()).should_fallback_to_terminal());
    }
}
