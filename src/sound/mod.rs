//! Sound playback for session completion.
//!
//! This module provides:
//!
//! - Alert sound discovery (macOS system sounds, freedesktop theme, user folder)
//! - A synthesized fallback chime
//! - Non-blocking playback through rodio
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundPlayer    │ ← trait used by the shell
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SoundSource    │────▶│   Sound file     │
//! │                  │     ├──────────────────┤
//! │                  │────▶│  Sine chime      │
//! └──────────────────┘     │  (fallback)      │
//!                          └──────────────────┘
//! ```

mod chime;
mod error;
mod player;
mod source;

pub use chime::{chime_tones, Tone, CHIME_VOLUME};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use source::{
    discover_sounds, get_default_sound, is_supported_sound_file, select_sound, sound_dirs,
    SoundSource,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Trait for sound playback implementations.
pub trait SoundPlayer {
    /// Plays a sound from the given source without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Mock sound player for testing.
///
/// Clones share the same recorded calls.
#[derive(Debug, Clone, Default)]
pub struct MockSoundPlayer {
    play_calls: Arc<Mutex<Vec<SoundSource>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(source.clone());
        Ok(())
    }
}
