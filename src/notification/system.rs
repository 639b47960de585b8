//! Desktop notification delivery through the platform's command-line tool.
//!
//! - macOS: `osascript -e 'display notification ...'`
//! - elsewhere: `notify-send` from libnotify
//!
//! The command runs with a timeout. A command that does not finish in time is
//! killed, so a stuck notification daemon never leaves processes behind.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::error::NotificationError;
use super::request::NotificationRequest;

/// Default timeout for notification delivery in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Application name reported to notify-send.
const APP_NAME: &str = "pomodori";

/// The command-line tool used to post notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBackend {
    Osascript,
    NotifySend,
}

impl NotifierBackend {
    /// Returns the backend native to the current platform.
    #[must_use]
    pub const fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::Osascript
        } else {
            Self::NotifySend
        }
    }

    /// Returns the executable name.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Osascript => "osascript",
            Self::NotifySend => "notify-send",
        }
    }

    /// Builds the command-line arguments for a request.
    #[must_use]
    pub fn args(self, request: &NotificationRequest) -> Vec<String> {
        let content = &request.content;
        match self {
            Self::Osascript => {
                let mut script = format!(
                    "display notification \"{}\" with title \"{}\"",
                    escape_applescript(&content.body),
                    escape_applescript(&content.title),
                );
                if let Some(subtitle) = &content.subtitle {
                    script.push_str(&format!(" subtitle \"{}\"", escape_applescript(subtitle)));
                }
                if content.sound {
                    script.push_str(" sound name \"default\"");
                }
                vec!["-e".to_string(), script]
            }
            Self::NotifySend => {
                let body = match &content.subtitle {
                    Some(subtitle) => format!("{}\n{}", subtitle, content.body),
                    None => content.body.clone(),
                };
                vec![
                    format!("--app-name={}", APP_NAME),
                    content.title.clone(),
                    body,
                ]
            }
        }
    }
}

/// Escapes text for use inside an AppleScript string literal.
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Looks up an executable in the directories of `PATH`.
#[must_use]
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

/// Posts desktop notifications by running the platform notifier command.
#[derive(Debug, Clone)]
pub struct SystemNotifier {
    backend: NotifierBackend,
    program: Option<PathBuf>,
    timeout: Duration,
}

impl SystemNotifier {
    /// Creates a notifier for the current platform.
    #[must_use]
    pub fn new() -> Self {
        let backend = NotifierBackend::detect();
        let program = find_in_path(backend.program());
        if program.is_none() {
            debug!(program = backend.program(), "Notifier command not found in PATH");
        }
        Self {
            backend,
            program,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Creates a notifier that runs a specific executable.
    #[must_use]
    pub fn with_program(backend: NotifierBackend, program: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            program: Some(program.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// Sets the delivery timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn backend(&self) -> NotifierBackend {
        self.backend
    }

    #[must_use]
    pub fn program(&self) -> Option<&Path> {
        self.program.as_deref()
    }

    /// Returns true if the notifier command was found.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.program.as_deref().is_some_and(Path::is_file)
    }

    /// Delivers a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The notifier command is missing (`NotificationError::CommandNotFound`)
    /// - It does not finish in time (`NotificationError::Timeout`)
    /// - It exits unsuccessfully (`NotificationError::SendFailed`)
    pub async fn send(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let program = self
            .program
            .clone()
            .filter(|path| path.is_file())
            .ok_or_else(|| NotificationError::CommandNotFound(self.backend.program().to_string()))?;

        let args = self.backend.args(request);
        debug!(id = %request.identifier, program = %program.display(), "Sending notification");

        self.deliver(&program, &args).await
    }

    /// Runs the notifier command under the delivery timeout.
    ///
    /// The child is killed when the timeout fires.
    async fn deliver(&self, program: &Path, args: &[String]) -> Result<(), NotificationError> {
        match timeout(self.timeout, run_notifier(program, args)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!("Notification delivery failed: {}", e);
                Err(e)
            }
            Err(_) => {
                warn!(program = %program.display(), "Notification command timed out, killed");
                Err(NotificationError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}

impl Default for SystemNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the notifier command to completion.
///
/// Dropping the returned future kills the child.
async fn run_notifier(program: &Path, args: &[String]) -> Result<(), NotificationError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| NotificationError::SendFailed(format!("command error: {}", e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(NotificationError::SendFailed(stderr.trim().to_string()))
    }
}
