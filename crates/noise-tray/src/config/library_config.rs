use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Noise library configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Directory scanned for noise audio and artwork. Defaults to the
    /// per-user data directory when unset.
    #[serde(default)]
    pub sounds_dir: Option<PathBuf>,
}
