//! Indicator icon resolution with theme fallback.

mod theme;

pub use theme::{IconTheme, session_theme_name};

use std::path::PathBuf;

use tracing::{debug, info};

/// Themed icon name for the playing state.
pub const INDICATOR_ICON: &str = "noise-tray-symbolic";

/// Themed icon name for the paused state.
pub const INDICATOR_ICON_PAUSED: &str = "noise-tray-pause-symbolic";

/// Generic pair (playing, paused) used when no theme carries the indicator
/// icons.
pub const FALLBACK_ICONS: [&str; 2] = [
    "media-playback-start-symbolic",
    "media-playback-pause-symbolic",
];

/// Shown next to "Now Playing" when a noise has no readable artwork.
pub const NOW_PLAYING_FALLBACK_ICON: &str = "audio-card-symbolic";

/// Theme probed first when neither the config nor the session names one.
pub const DEFAULT_THEME: &str = "Adwaita";

/// Theme probed after the session default.
pub const FALLBACK_THEME: &str = "hicolor";

/// Reference to a concrete icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    /// Absolute path to a raster icon file.
    File(PathBuf),
    /// Freedesktop icon name backed by a built-in resource.
    Named(String),
}

/// The two tray icons, fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorIcons {
    /// Icon shown while playing.
    pub active: IconRef,
    /// Icon shown while paused.
    pub paused: IconRef,
}

impl IndicatorIcons {
    /// Resolve the indicator pair from `themes`, probed in order.
    ///
    /// A theme is used only when it supplies BOTH names; a theme carrying
    /// one of the two is treated as carrying none, so a mismatched pair is
    /// never rendered. When no theme qualifies, the generic built-in pair
    /// is used.
    pub fn resolve(themes: &[IconTheme]) -> Self {
        for theme in themes {
            if let Some((active, paused)) = theme.lookup_pair(INDICATOR_ICON, INDICATOR_ICON_PAUSED)
            {
                info!(theme = %theme.name(), "Indicator icons resolved from theme");
                return Self {
                    active: IconRef::File(active),
                    paused: IconRef::File(paused),
                };
            }
        }

        debug!("No theme supplies both indicator icons, using generic pair");
        Self::builtin()
    }

    /// The generic built-in pair.
    pub fn builtin() -> Self {
        Self {
            active: IconRef::Named(FALLBACK_ICONS[0].to_string()),
            paused: IconRef::Named(FALLBACK_ICONS[1].to_string()),
        }
    }
}
