//! Notification content construction.
//!
//! This module provides a builder for creating notification content
//! with type-safe fluent API.

use crate::types::Session;

/// Title used for every completion notification.
pub const NOTIFICATION_TITLE: &str = "Pomodoro";

/// Maximum length for any notification text field.
const MAX_TEXT_LENGTH: usize = 200;

/// The text and sound flag of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: String,
    /// Whether the backend should play its own alert sound.
    pub sound: bool,
}

/// Builder for constructing notification content.
#[derive(Debug, Default)]
pub struct NotificationContentBuilder {
    content: NotificationContent,
}

impl NotificationContentBuilder {
    /// Creates a new notification content builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notification title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.content.title = sanitize_text(title).unwrap_or_default();
        self
    }

    /// Sets the notification subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.content.subtitle = sanitize_text(subtitle);
        self
    }

    /// Sets the notification body text.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.content.body = sanitize_text(body).unwrap_or_default();
        self
    }

    /// Requests the backend's default alert sound.
    #[must_use]
    pub fn default_sound(mut self) -> Self {
        self.content.sound = true;
        self
    }

    /// Builds and returns the notification content.
    #[must_use]
    pub fn build(self) -> NotificationContent {
        self.content
    }
}

/// Strips control characters and truncates overly long text.
///
/// Returns None if nothing printable is left.
#[must_use]
pub fn sanitize_text(text: &str) -> Option<String> {
    let sanitized: String = text
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_TEXT_LENGTH)
        .collect();

    if sanitized.trim().is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

/// Returns the body text announcing that `completed` has finished.
#[must_use]
pub const fn completion_body(completed: Session) -> &'static str {
    match completed {
        Session::Work => "Great work! Take a break.",
        Session::ShortBreak => "Break is over — time to focus!",
    }
}

/// Creates notification content for a completed session.
///
/// The shell plays its own completion sound, so the backend sound is left off.
#[must_use]
pub fn create_completion_content(completed: Session) -> NotificationContent {
    NotificationContentBuilder::new()
        .title(NOTIFICATION_TITLE)
        .body(completion_body(completed))
        .build()
}
