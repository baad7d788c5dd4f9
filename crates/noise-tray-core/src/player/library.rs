//! Noise discovery from a sounds directory.

use crate::{CoreError, CoreResult};

use std::{
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{debug, info};

/// Audio file extensions recognized as playable noises.
const SOUND_EXTENSIONS: [&str; 3] = ["ogg", "mp3", "wav"];

/// Image extensions probed for sibling artwork, in priority order.
const ICON_EXTENSIONS: [&str; 2] = ["png", "svg"];

/// A named ambient sound asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noise {
    /// Human-readable display name.
    pub name: String,
    /// Absolute path to the noise artwork, when it ships any.
    pub icon: Option<PathBuf>,
}

/// Ordered collection of noises a player rotates through.
#[derive(Debug, Clone)]
pub struct NoiseLibrary {
    noises: Vec<Noise>,
}

impl NoiseLibrary {
    /// Discover noises in `dir`.
    ///
    /// Each audio file becomes one noise; an image with the same stem
    /// becomes its artwork. Names are derived from the file stem
    /// (`coffee_shop.ogg` -> "Coffee Shop") and the result is sorted by
    /// name so rotation order is stable across runs.
    #[track_caller]
    pub fn discover(dir: &Path) -> CoreResult<Self> {
        let entries = fs::read_dir(dir).map_err(|e| CoreError::LibraryUnavailable {
            path: dir.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut noises = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let is_sound = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOUND_EXTENSIONS.contains(&ext));
            if !is_sound {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            noises.push(Noise {
                name: display_name(stem),
                icon: sibling_artwork(&path),
            });
        }

        if noises.is_empty() {
            return Err(CoreError::LibraryEmpty {
                path: dir.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        noises.sort_by(|a, b| a.name.cmp(&b.name));
        info!(path = ?dir, count = noises.len(), "Noise library discovered");

        Ok(Self { noises })
    }

    /// Built-in noise set used when no sounds directory is installed.
    pub fn builtin() -> Self {
        let noises = [
            "Rain",
            "Storm",
            "Wind",
            "Night",
            "Sea",
            "Coffee Shop",
            "Fire",
            "River",
        ]
        .into_iter()
        .map(|name| Noise {
            name: name.to_string(),
            icon: None,
        })
        .collect();

        debug!("Using built-in noise set");
        Self { noises }
    }

    /// Number of noises in the library.
    pub fn len(&self) -> usize {
        self.noises.len()
    }

    /// Whether the library holds no noises.
    pub fn is_empty(&self) -> bool {
        self.noises.is_empty()
    }

    /// Noise at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Noise> {
        self.noises.get(index)
    }
}

/// Artwork sharing the audio file's stem, first matching extension wins.
fn sibling_artwork(sound: &Path) -> Option<PathBuf> {
    ICON_EXTENSIONS
        .iter()
        .map(|ext| sound.with_extension(ext))
        .find(|candidate| candidate.is_file())
}

/// Title Case name from a file stem: underscores and dashes become spaces.
fn display_name(stem: &str) -> String {
    stem.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
