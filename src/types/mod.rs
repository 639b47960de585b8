//! Core data types for the Pomodori timer.
//!
//! This module defines:
//! - `Session`: the two-phase Work / Short Break cycle and its fixed properties
//! - `TimerState`: Idle / Running / Paused
//! - `EngineSnapshot`: a read-only view of the engine, plus the display string
//!   derived from it

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Length of a work session in seconds (25 minutes).
pub const WORK_DURATION_SECS: u32 = 25 * 60;

/// Length of a short break in seconds (5 minutes).
pub const SHORT_BREAK_DURATION_SECS: u32 = 5 * 60;

/// Marker shown in the display string while paused.
pub const PAUSED_ICON: &str = "⏸";

// ============================================================================
// Session
// ============================================================================

/// Fixed per-session properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProperties {
    /// Session length in seconds
    pub duration_secs: u32,
    /// Human-readable label ("Work", "Break")
    pub label: &'static str,
    /// Icon prefixed to the display string
    pub icon: &'static str,
}

const WORK_PROPERTIES: SessionProperties = SessionProperties {
    duration_secs: WORK_DURATION_SECS,
    label: "Work",
    icon: "🍅",
};

const SHORT_BREAK_PROPERTIES: SessionProperties = SessionProperties {
    duration_secs: SHORT_BREAK_DURATION_SECS,
    label: "Break",
    icon: "☕",
};

/// The current phase of the cycle.
///
/// Sessions alternate strictly: `Work → ShortBreak → Work → …`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// Focused work interval
    #[default]
    Work,
    /// Short break between work intervals
    ShortBreak,
}

impl Session {
    /// Returns the fixed properties of this session.
    pub const fn properties(self) -> &'static SessionProperties {
        match self {
            Session::Work => &WORK_PROPERTIES,
            Session::ShortBreak => &SHORT_BREAK_PROPERTIES,
        }
    }

    /// Returns the session length in seconds.
    pub const fn duration_secs(self) -> u32 {
        self.properties().duration_secs
    }

    /// Returns the display label.
    pub const fn label(self) -> &'static str {
        self.properties().label
    }

    /// Returns the display icon.
    pub const fn icon(self) -> &'static str {
        self.properties().icon
    }

    /// Returns the session that follows this one.
    pub const fn next(self) -> Session {
        match self {
            Session::Work => Session::ShortBreak,
            Session::ShortBreak => Session::Work,
        }
    }

    /// Returns the string representation used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Work => "work",
            Session::ShortBreak => "short_break",
        }
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Run state of the timer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// Not counting; `remaining` holds the full session length
    #[default]
    Idle,
    /// Counting down once per second
    Running,
    /// Countdown suspended; `remaining` is preserved
    Paused,
}

impl TimerState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
        }
    }

    /// Returns true if the countdown is active.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running)
    }
}

// ============================================================================
// EngineSnapshot
// ============================================================================

/// Point-in-time copy of the engine's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Run state
    pub state: TimerState,
    /// Current session
    pub session: Session,
    /// Seconds left in the current session
    pub remaining_seconds: u32,
}

impl EngineSnapshot {
    /// Snapshot of a freshly created engine (`Idle / Work / 25:00`).
    pub fn initial() -> Self {
        Self {
            state: TimerState::Idle,
            session: Session::Work,
            remaining_seconds: Session::Work.duration_secs(),
        }
    }

    /// Returns the status display string, e.g. `"🍅 24:59"` or `"☕ ⏸ 03:10"`.
    pub fn display(&self) -> String {
        format_display(self.state, self.session, self.remaining_seconds)
    }
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

// ============================================================================
// Display derivation
// ============================================================================

/// Formats seconds as a zero-padded `MM:SS` string.
pub fn format_time(remaining_seconds: u32) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Derives the status display string from the engine state.
///
/// Format:
/// - Idle / Running: `"{icon} MM:SS"`
/// - Paused: `"{icon} ⏸ MM:SS"`
pub fn format_display(state: TimerState, session: Session, remaining_seconds: u32) -> String {
    let time = format_time(remaining_seconds);
    match state {
        TimerState::Idle | TimerState::Running => format!("{} {}", session.icon(), time),
        TimerState::Paused => format!("{} {} {}", session.icon(), PAUSED_ICON, time),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Session Tests
    // ------------------------------------------------------------------------

    mod session_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(Session::default(), Session::Work);
        }

        #[test]
        fn test_durations() {
            assert_eq!(Session::Work.duration_secs(), 1500);
            assert_eq!(Session::ShortBreak.duration_secs(), 300);
        }

        #[test]
        fn test_labels_and_icons() {
            assert_eq!(Session::Work.label(), "Work");
            assert_eq!(Session::ShortBreak.label(), "Break");
            assert_eq!(Session::Work.icon(), "🍅");
            assert_eq!(Session::ShortBreak.icon(), "☕");
        }

        #[test]
        fn test_next_alternates() {
            assert_eq!(Session::Work.next(), Session::ShortBreak);
            assert_eq!(Session::ShortBreak.next(), Session::Work);
        }

        #[test]
        fn test_next_is_two_cycle() {
            for session in [Session::Work, Session::ShortBreak] {
                assert_eq!(session.next().next(), session);
                assert_ne!(session.next(), session);
            }
        }

        #[test]
        fn test_properties_lookup_matches_accessors() {
            let props = Session::ShortBreak.properties();
            assert_eq!(props.duration_secs, Session::ShortBreak.duration_secs());
            assert_eq!(props.label, Session::ShortBreak.label());
            assert_eq!(props.icon, Session::ShortBreak.icon());
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&Session::ShortBreak).unwrap();
            assert_eq!(json, "\"short_break\"");
            assert_eq!(Session::ShortBreak.as_str(), "short_break");
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(TimerState::default(), TimerState::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(TimerState::Idle.as_str(), "idle");
            assert_eq!(TimerState::Running.as_str(), "running");
            assert_eq!(TimerState::Paused.as_str(), "paused");
        }

        #[test]
        fn test_is_running() {
            assert!(!TimerState::Idle.is_running());
            assert!(TimerState::Running.is_running());
            assert!(!TimerState::Paused.is_running());
        }

        #[test]
        fn test_serialize_deserialize() {
            let json = serde_json::to_string(&TimerState::Paused).unwrap();
            assert_eq!(json, "\"paused\"");

            let state: TimerState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, TimerState::Paused);
        }
    }

    // ------------------------------------------------------------------------
    // Display Tests
    // ------------------------------------------------------------------------

    mod display_tests {
        use super::*;

        #[test]
        fn test_format_time() {
            assert_eq!(format_time(0), "00:00");
            assert_eq!(format_time(59), "00:59");
            assert_eq!(format_time(60), "01:00");
            assert_eq!(format_time(1500), "25:00");
            assert_eq!(format_time(1499), "24:59");
        }

        #[test]
        fn test_initial_display() {
            assert_eq!(EngineSnapshot::initial().display(), "🍅 25:00");
        }

        #[test]
        fn test_running_display_matches_idle_format() {
            let idle = format_display(TimerState::Idle, Session::Work, 930);
            let running = format_display(TimerState::Running, Session::Work, 930);
            assert_eq!(idle, "🍅 15:30");
            assert_eq!(idle, running);
        }

        #[test]
        fn test_paused_display() {
            let display = format_display(TimerState::Paused, Session::ShortBreak, 190);
            assert_eq!(display, "☕ ⏸ 03:10");
        }

        #[test]
        fn test_snapshot_serialize() {
            let snapshot = EngineSnapshot {
                state: TimerState::Running,
                session: Session::Work,
                remaining_seconds: 1499,
            };
            let json = serde_json::to_string(&snapshot).unwrap();
            assert_eq!(
                json,
                r#"{"state":"running","session":"work","remaining_seconds":1499}"#
            );
        }
    }
}
