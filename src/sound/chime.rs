//! Built-in completion chime.
//!
//! Used when no alert sound file is available or a file fails to decode.
//! The chime is a short rising two-note figure rendered with rodio sine
//! waves, so nothing has to be bundled with the binary.

use std::time::Duration;

/// Output gain applied to every tone.
pub const CHIME_VOLUME: f32 = 0.2;

/// A single sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz
    pub frequency_hz: f32,
    /// How long the tone sounds
    pub duration: Duration,
}

/// A5 then E6.
const CHIME_TONES: [Tone; 2] = [
    Tone {
        frequency_hz: 880.0,
        duration: Duration::from_millis(160),
    },
    Tone {
        frequency_hz: 1318.5,
        duration: Duration::from_millis(240),
    },
];

/// Returns the tones of the completion chime, in playback order.
#[must_use]
pub fn chime_tones() -> &'static [Tone] {
    &CHIME_TONES
}
