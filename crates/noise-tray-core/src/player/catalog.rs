//! Reference player over a [`NoiseLibrary`].

use crate::{NoiseLibrary, Player};

use tracing::debug;

/// State-only [`Player`] implementation.
///
/// Tracks the transport flag and the rotation position; producing sound is
/// the host player's concern, not this crate's. Front-ends and tests get a
/// deterministic facade with the full contract.
#[derive(Debug)]
pub struct CatalogPlayer {
    library: NoiseLibrary,
    index: usize,
    playing: bool,
}

impl CatalogPlayer {
    /// Create a paused player positioned on the first noise.
    pub fn new(library: NoiseLibrary) -> Self {
        Self {
            library,
            index: 0,
            playing: false,
        }
    }
}

impl Player for CatalogPlayer {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn play(&mut self) {
        self.playing = true;
        debug!(noise = %self.current_noise_name(), "Transport: play");
    }

    fn pause(&mut self) {
        self.playing = false;
        debug!(noise = %self.current_noise_name(), "Transport: pause");
    }

    fn skip_next(&mut self) {
        if self.library.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.library.len();
        debug!(noise = %self.current_noise_name(), "Transport: next");
    }

    fn skip_previous(&mut self) {
        if self.library.is_empty() {
            return;
        }
        self.index = (self.index + self.library.len() - 1) % self.library.len();
        debug!(noise = %self.current_noise_name(), "Transport: previous");
    }

    fn current_noise_name(&self) -> String {
        self.library
            .get(self.index)
            .map(|noise| noise.name.clone())
            .unwrap_or_default()
    }

    fn current_noise_icon_uri(&self) -> Option<String> {
        let icon = self.library.get(self.index)?.icon.as_ref()?;
        Some(format!("file://{}", icon.display()))
    }

    fn disconnect_legacy_remote_control(&mut self) {
        // Nothing registered on the session bus for the in-process player.
        debug!("No legacy remote-control registration to drop");
    }
}
