use crate::VisualState;

use noise_tray_core::IconRef;

/// Commands sent from the controller to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum TrayCommand {
    /// Render the menu label, menu image and tray icon for a transport state.
    RenderState(VisualState),
    /// Replace the "Now Playing" label and artwork.
    SetNowPlaying(NowPlaying),
    /// Reveal the indicator once startup has settled.
    SetActive,
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Current-noise presentation, recomputed from the player on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    /// Menu label, always "Now Playing: <name>".
    pub label: String,
    /// Artwork reference; a named fallback when the noise has none readable.
    pub icon: IconRef,
}
