//! Player transport surface consumed by indicator front-ends.

mod catalog;
mod library;

pub use {
    catalog::CatalogPlayer,
    library::{Noise, NoiseLibrary},
};

/// Control surface of an ambient-noise player.
///
/// Transport operations are side-effecting; callers do not rely on return
/// values. Implementations decide what "playing" physically means; the
/// indicator only mirrors the state it is told about.
pub trait Player {
    /// Whether the player is currently producing sound.
    fn is_playing(&self) -> bool;

    /// Start or resume playback of the current noise.
    fn play(&mut self);

    /// Pause playback, keeping the current noise selected.
    fn pause(&mut self);

    /// Advance to the next noise in the rotation.
    fn skip_next(&mut self);

    /// Step back to the previous noise in the rotation.
    fn skip_previous(&mut self);

    /// Display name of the current noise.
    fn current_noise_name(&self) -> String;

    /// Artwork URI of the current noise.
    ///
    /// `None` when the noise ships no artwork or the lookup fails for any
    /// reason; callers substitute a fallback icon and do not inspect the
    /// cause. `file://` URIs are the common form.
    fn current_noise_icon_uri(&self) -> Option<String>;

    /// Tear down any legacy session-bus remote-control registration.
    ///
    /// A second control surface double-signals transport changes, so
    /// front-ends call this once before taking over.
    fn disconnect_legacy_remote_control(&mut self);
}
