//! Timer engine for Pomodori.
//!
//! - `timer`: the Idle / Running / Paused state machine and its events
//! - `tick`: the cancellable one-second schedule the engine depends on
//! - `driver`: a tokio task that owns the engine and serializes all access

pub mod driver;
pub mod tick;
pub mod timer;

pub use driver::{spawn_engine, spawn_engine_with, EngineHandle};
pub use tick::{IntervalTickSource, ManualTickSource, TickSource, TICK_PERIOD};
pub use timer::{EngineCommand, TimerEngine, TimerEvent};
