//! Session completion notifications.
//!
//! This module includes:
//!
//! - Notification content for each completed session
//! - Desktop delivery via `osascript` (macOS) or `notify-send`
//! - A terminal bell fallback when no desktop backend works
//!
//! # Example
//!
//! ```no_run
//! use pomodori::notification::{
//!     create_completion_content, create_notification_request, FallbackNotifier,
//!     NotificationSender,
//! };
//! use pomodori::types::Session;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let notifier = FallbackNotifier::new();
//! let request = create_notification_request(create_completion_content(Session::Work));
//! notifier.send(&request).await?;
//! # Ok(())
//! # }
//! ```

mod content;
pub mod error;
mod request;
mod system;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

pub use self::content::{
    completion_body, create_completion_content, sanitize_text, NotificationContent,
    NotificationContentBuilder, NOTIFICATION_TITLE,
};
pub use self::error::NotificationError;
pub use self::request::{
    create_notification_request, create_notification_request_with_id, NotificationRequest,
};
pub use self::system::{find_in_path, NotifierBackend, SystemNotifier, DEFAULT_TIMEOUT_SECONDS};

#[allow(async_fn_in_trait)]
pub trait NotificationSender {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError>;
}

impl NotificationSender for SystemNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        SystemNotifier::send(self, request).await
    }
}

/// Rings the terminal bell and prints the notification on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    /// Formats the line written for a request, without the bell.
    #[must_use]
    pub fn format(request: &NotificationRequest) -> String {
        let content = &request.content;
        match &content.subtitle {
            Some(subtitle) => format!("{} ({}): {}", content.title, subtitle, content.body),
            None => format!("{}: {}", content.title, content.body),
        }
    }
}

impl NotificationSender for TerminalNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "\x07{}", Self::format(request))
            .map_err(|e| NotificationError::SendFailed(e.to_string()))
    }
}

/// Tries the desktop notifier first, then the terminal.
///
/// The terminal is used directly when no desktop notifier command exists.
#[derive(Debug, Clone, Default)]
pub struct FallbackNotifier {
    system: SystemNotifier,
    terminal: TerminalNotifier,
}

impl FallbackNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_system(SystemNotifier::new())
    }

    #[must_use]
    pub fn with_system(system: SystemNotifier) -> Self {
        Self {
            system,
            terminal: TerminalNotifier,
        }
    }

    #[must_use]
    pub fn system(&self) -> &SystemNotifier {
        &self.system
    }
}

impl NotificationSender for FallbackNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        if !self.system.is_available() {
            return self.terminal.send(request).await;
        }

        match self.system.send(request).await {
            Ok(()) => Ok(()),
            Err(e) if e.should_fallback_to_terminal() => {
                debug!("Desktop notification failed ({}), using terminal", e);
                self.terminal.send(request).await
            }
            Err(e) => Err(e),
        }
    }
}

/// Notification sender for tests.
///
/// Clones share the same recorded requests.
#[derive(Debug, Clone)]
pub struct MockNotificationSender {
    notifications: Arc<Mutex<Vec<NotificationRequest>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockNotificationSender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn get_notifications(&self) -> Vec<NotificationRequest> {
        self.notifications.lock().unwrap().clone()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn clear_recorded(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSender for MockNotificationSender {
    async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.notifications.lock().unwrap().push(request.clone());
        Ok(())
    }
}
