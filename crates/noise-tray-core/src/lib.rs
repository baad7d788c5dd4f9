//! Noise-Tray Core Library
//!
//! Shared surface for ambient-noise indicator front-ends: the player
//! transport trait, noise discovery, and tray icon resolution.
//!
//! # Example
//!
//! ```
//! use noise_tray_core::{CatalogPlayer, NoiseLibrary, Player};
//!
//! let mut player = CatalogPlayer::new(NoiseLibrary::builtin());
//!
//! player.play();
//! assert!(player.is_playing());
//!
//! player.skip_next();
//! println!("{}", player.current_noise_name());
//! ```

mod error;
mod icons;
mod player;

pub use {
    error::{CoreError, Result as CoreResult},
    icons::{
        DEFAULT_THEME, FALLBACK_ICONS, FALLBACK_THEME, INDICATOR_ICON, INDICATOR_ICON_PAUSED,
        IconRef, IconTheme, IndicatorIcons, NOW_PLAYING_FALLBACK_ICON, session_theme_name,
    },
    player::{CatalogPlayer, Noise, NoiseLibrary, Player},
};

#[cfg(test)]
mod tests;
