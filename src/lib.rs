//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the `pomodori` CLI.
//! It includes:
//! - Timer engine: work / break state machine driven by a 1 Hz tick source
//! - Menu model: state-dependent actions and key bindings
//! - Interactive shell rendering the status line and reacting to completions
//! - CLI command parsing and display utilities
//! - Desktop notifications with a terminal fallback
//! - Sound playback for session completion

pub mod app;
pub mod cli;
pub mod engine;
pub mod menu;
pub mod notification;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{EngineSnapshot, Session, TimerState};

pub use engine::{
    spawn_engine, EngineCommand, EngineHandle, IntervalTickSource, ManualTickSource, TickSource,
    TimerEngine, TimerEvent,
};

pub use app::{App, AppConfig};

pub use menu::{MenuAction, MenuBuilder, MenuConfig, MenuItemConfig};

pub use notification::{
    FallbackNotifier, MockNotificationSender, NotificationError, NotificationSender,
    SystemNotifier, TerminalNotifier,
};

pub use sound::{
    get_default_sound, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer, SoundSource,
};
