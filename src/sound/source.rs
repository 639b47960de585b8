//! Sound source selection.
//!
//! The completion sound is a platform alert file when one can be found
//! (macOS system sounds, freedesktop sound theme, the user's own sound
//! folder), otherwise the synthesized chime.

use std::path::{Path, PathBuf};

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// The name of the sound (file stem, e.g. "Glass").
        name: String,
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// The built-in two-tone chime.
    Chime,
}

impl SoundSource {
    /// Creates a file sound source.
    #[must_use]
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::File {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::Chime => "chime",
        }
    }

    /// Returns the file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path.as_path()),
            Self::Chime => None,
        }
    }

    /// Returns true if this is the synthesized chime.
    #[must_use]
    pub fn is_chime(&self) -> bool {
        matches!(self, Self::Chime)
    }
}

/// System sound directories, in order of priority.
const SYSTEM_SOUND_DIRS: &[&str] = &[
    "/System/Library/Sounds",
    "/Library/Sounds",
    "/usr/share/sounds/freedesktop/stereo",
];

/// Supported audio file extensions.
const SUPPORTED_EXTENSIONS: &[&str] = &["aiff", "wav", "mp3", "flac", "ogg", "oga"];

/// Preferred sound names, in order of preference.
const PREFERRED_SOUND_NAMES: &[&str] = &["Glass", "Ping", "complete", "bell"];

/// Returns the directories searched for completion sounds.
///
/// The user's own sound folder (`~/Library/Sounds`) comes first.
#[must_use]
pub fn sound_dirs() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = dirs::home_dir()
        .map(|home| home.join("Library").join("Sounds"))
        .into_iter()
        .collect();
    paths.extend(SYSTEM_SOUND_DIRS.iter().map(PathBuf::from));
    paths
}

/// Returns true if the path has a supported audio extension.
#[must_use]
pub fn is_supported_sound_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Lists the supported sound files in a directory, sorted by name.
///
/// Missing or unreadable directories yield an empty list.
#[must_use]
pub fn discover_sounds(dir: &Path) -> Vec<SoundSource> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut sounds: Vec<SoundSource> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_sound_file(path))
        .filter_map(|path| {
            let name = path.file_stem()?.to_string_lossy().into_owned();
            Some(SoundSource::File { name, path })
        })
        .collect();

    sounds.sort_by(|a, b| a.name().cmp(b.name()));
    sounds
}

/// Picks the completion sound from the given directories.
///
/// Preferred names win over directory order; otherwise the first sound found
/// is used; otherwise the chime.
#[must_use]
pub fn select_sound(dirs: &[PathBuf]) -> SoundSource {
    let sounds: Vec<SoundSource> = dirs.iter().flat_map(|dir| discover_sounds(dir)).collect();

    for preferred in PREFERRED_SOUND_NAMES {
        if let Some(sound) = sounds.iter().find(|s| s.name() == *preferred) {
            return sound.clone();
        }
    }

    sounds.into_iter().next().unwrap_or(SoundSource::Chime)
}

/// Returns the default completion sound for this machine.
#[must_use]
pub fn get_default_sound() -> SoundSource {
    select_sound(&sound_dirs())
}
