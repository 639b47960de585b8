//! Timer engine for Pomodori.
//!
//! This module provides the core state machine:
//! - State transitions (Idle → Running ⇄ Paused, reset/skip back to Idle)
//! - One-second countdown steps driven by a [`TickSource`]
//! - Tick and completion events for the presentation layer

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::types::{EngineSnapshot, Session, TimerState};

use super::tick::TickSource;

// ============================================================================
// TimerEvent
// ============================================================================

/// Events emitted by the engine.
///
/// On completion the engine emits `Completed` (carrying the session that just
/// finished) before it advances, then `Tick` (carrying the new session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown changed, or reset/skip changed the displayed value
    Tick {
        /// State after the change
        snapshot: EngineSnapshot,
    },
    /// A session ran to zero
    Completed {
        /// State at the moment of completion, before the session advances
        snapshot: EngineSnapshot,
    },
}

impl TimerEvent {
    /// Returns the snapshot carried by this event.
    pub fn snapshot(&self) -> &EngineSnapshot {
        match self {
            TimerEvent::Tick { snapshot } | TimerEvent::Completed { snapshot } => snapshot,
        }
    }
}

// ============================================================================
// EngineCommand
// ============================================================================

/// User commands accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    /// Start counting, or resume from pause
    Start,
    /// Suspend counting, keeping the remaining time
    Pause,
    /// Return to Idle with the current session's full duration
    Reset,
    /// Advance to the next session and return to Idle
    Skip,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the timer state and its tick source.
///
/// The engine is not internally synchronized. All calls, including
/// [`TimerEngine::tick`], must be serialized by the owner.
pub struct TimerEngine<T> {
    /// Current run state
    state: TimerState,
    /// Current session
    session: Session,
    /// Seconds left in the current session
    remaining_seconds: u32,
    /// Periodic schedule, armed exactly while running
    tick_source: T,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<T: TickSource> TimerEngine<T> {
    /// Creates an idle engine at the start of a work session.
    pub fn new(tick_source: T, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::Idle,
            session: Session::Work,
            remaining_seconds: Session::Work.duration_secs(),
            tick_source,
            event_tx,
        }
    }

    /// Starts or resumes the countdown.
    ///
    /// Calling this while already running keeps the active schedule.
    pub fn start(&mut self) {
        if self.tick_source.is_armed() {
            debug!("start: tick source already armed");
        } else {
            self.tick_source.arm();
        }
        self.state = TimerState::Running;
        info!(
            session = self.session.as_str(),
            remaining = self.remaining_seconds,
            "timer started"
        );
    }

    /// Pauses the countdown without touching the remaining time.
    pub fn pause(&mut self) {
        self.tick_source.disarm();
        self.state = TimerState::Paused;
        info!(remaining = self.remaining_seconds, "timer paused");
    }

    /// Returns to Idle with the full duration of the current session.
    pub fn reset(&mut self) {
        self.tick_source.disarm();
        self.state = TimerState::Idle;
        self.remaining_seconds = self.session.duration_secs();
        info!(session = self.session.as_str(), "timer reset");
        self.emit_tick();
    }

    /// Advances to the next session and returns to Idle.
    pub fn skip(&mut self) {
        self.tick_source.disarm();
        self.session = self.session.next();
        self.remaining_seconds = self.session.duration_secs();
        self.state = TimerState::Idle;
        info!(session = self.session.as_str(), "session skipped");
        self.emit_tick();
    }

    /// Applies a command.
    pub fn apply(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Start => self.start(),
            EngineCommand::Pause => self.pause(),
            EngineCommand::Reset => self.reset(),
            EngineCommand::Skip => self.skip(),
        }
    }

    /// Performs one countdown step.
    ///
    /// Returns true if this tick completed the session. A tick that arrives
    /// while not running is dropped without emitting anything.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            debug!(state = self.state.as_str(), "dropping tick outside running state");
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        let completed = self.remaining_seconds == 0;
        if completed {
            self.complete_session();
        }

        self.emit_tick();
        completed
    }

    /// Handles a session running to zero.
    fn complete_session(&mut self) {
        self.tick_source.disarm();

        // Observers must see the finishing session in the completion event.
        self.emit(TimerEvent::Completed {
            snapshot: self.snapshot(),
        });
        info!(session = self.session.as_str(), "session completed");

        self.session = self.session.next();
        self.remaining_seconds = self.session.duration_secs();
        self.state = TimerState::Idle;
    }

    fn emit_tick(&self) {
        self.emit(TimerEvent::Tick {
            snapshot: self.snapshot(),
        });
    }

    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!(?event, "no event receiver; dropping event");
        }
    }

    /// Returns the current run state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns the current session.
    pub fn session(&self) -> Session {
        self.session
    }

    /// Returns the seconds left in the current session.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Returns a copy of the observable state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state,
            session: self.session,
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Returns the status display string.
    pub fn display(&self) -> String {
        self.snapshot().display()
    }

    /// Returns the tick source.
    pub fn tick_source(&self) -> &T {
        &self.tick_source
    }

    /// Returns the tick source mutably, for the driver that polls it.
    pub fn tick_source_mut(&mut self) -> &mut T {
        &mut self.tick_source
    }
}

// ============================================================================
// Tests
// ============================================================================
