//! Display utilities for the pomodoro timer CLI.
//!
//! This module provides formatted output for:
//! - The status line (redrawn in place on a terminal)
//! - Plain status lines when output is piped
//! - JSON snapshots for scripts
//! - The action menu, hints and errors

use std::io::{self, Write};

use serde::Serialize;

use crate::menu::MenuConfig;
use crate::types::EngineSnapshot;

/// Erases the current terminal line and returns the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

// ============================================================================
// Output selection
// ============================================================================

/// Output format requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable status line
    #[default]
    StatusLine,
    /// One JSON object per snapshot
    Json,
}

/// How the status is actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Redraw a single line on a terminal
    InPlace,
    /// One line per change
    Lines,
    /// One JSON object per change
    Json,
}

impl RenderMode {
    /// Picks the render mode for the requested output and stdout kind.
    pub fn detect(output: OutputMode, is_terminal: bool) -> Self {
        match (output, is_terminal) {
            (OutputMode::Json, _) => Self::Json,
            (OutputMode::StatusLine, true) => Self::InPlace,
            (OutputMode::StatusLine, false) => Self::Lines,
        }
    }
}

/// JSON form of a snapshot.
#[derive(Debug, Serialize)]
struct JsonStatus<'a> {
    #[serde(flatten)]
    snapshot: &'a EngineSnapshot,
    display: String,
}

// ============================================================================
// StatusRenderer
// ============================================================================

/// Writes engine snapshots to an output stream.
///
/// Identical consecutive snapshots are written once.
#[derive(Debug)]
pub struct StatusRenderer<W: Write> {
    writer: W,
    mode: RenderMode,
    last: Option<EngineSnapshot>,
    /// An in-place status line is on screen without a trailing newline.
    line_open: bool,
}

impl<W: Write> StatusRenderer<W> {
    pub fn new(writer: W, mode: RenderMode) -> Self {
        Self {
            writer,
            mode,
            last: None,
            line_open: false,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a snapshot unless it equals the previous one.
    ///
    /// Returns whether anything was written.
    pub fn render(&mut self, snapshot: &EngineSnapshot) -> io::Result<bool> {
        if self.last.as_ref() == Some(snapshot) {
            return Ok(false);
        }

        match self.mode {
            RenderMode::InPlace => {
                write!(self.writer, "{}{}", CLEAR_LINE, snapshot.display())?;
                self.line_open = true;
            }
            RenderMode::Lines => writeln!(self.writer, "{}", snapshot.display())?,
            RenderMode::Json => {
                let status = JsonStatus {
                    snapshot,
                    display: snapshot.display(),
                };
                let line = serde_json::to_string(&status).map_err(io::Error::other)?;
                writeln!(self.writer, "{}", line)?;
            }
        }

        self.writer.flush()?;
        self.last = Some(*snapshot);
        Ok(true)
    }

    /// Writes the available actions, e.g.
    /// `Work Session  [s] Start  [r] Reset  [k] Skip to Break  [q] Quit`.
    ///
    /// Nothing is written in JSON mode. The next snapshot is always redrawn.
    pub fn show_menu(&mut self, menu: &MenuConfig) -> io::Result<()> {
        if self.mode == RenderMode::Json {
            return Ok(());
        }

        let line = format_menu(menu);
        self.write_message(&line)
    }

    /// Writes a one-line hint (stderr in JSON mode).
    pub fn show_hint(&mut self, message: &str) -> io::Result<()> {
        if self.mode == RenderMode::Json {
            eprintln!("{}", message);
            return Ok(());
        }
        self.write_message(message)
    }

    /// Terminates an open status line.
    pub fn finish(&mut self) -> io::Result<()> {
        self.close_line()?;
        self.writer.flush()
    }

    fn write_message(&mut self, message: &str) -> io::Result<()> {
        self.close_line()?;
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        self.last = None;
        Ok(())
    }

    fn close_line(&mut self) -> io::Result<()> {
        if self.line_open {
            writeln!(self.writer)?;
            self.line_open = false;
        }
        Ok(())
    }
}

/// Formats the enabled menu items on one line.
pub fn format_menu(menu: &MenuConfig) -> String {
    let mut line = menu.header.text.clone();
    for item in menu.items().into_iter().skip(1) {
        if let (true, Some(key)) = (item.enabled, item.key()) {
            line.push_str(&format!("  [{}] {}", key, item.text));
        }
    }
    line
}

/// Help text listing every key binding.
pub fn help_text() -> &'static str {
    "Keys: s start/resume, p pause, r reset, k skip, h help, q quit (Enter to confirm)"
}

/// Formats a fatal error for stderr.
pub fn error_line(message: &str) -> String {
    format!("Error: {}", message)
}

/// Shows an error message on stderr.
pub fn show_error(message: &str) {
    eprintln!("{}", error_line(message));
}

// ============================================================================
// Tests
// ============================================================================
