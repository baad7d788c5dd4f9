use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Noise library errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Sounds directory could not be read.
    #[error("Noise library unavailable at {path:?}: {source} {location}")]
    LibraryUnavailable {
        /// Directory that failed to open.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Directory was readable but contained no playable noises.
    #[error("Noise library at {path:?} contains no noises {location}")]
    LibraryEmpty {
        /// Directory that was scanned.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
