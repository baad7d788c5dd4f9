//! Declarative tray menu layout.
//!
//! The layout ships as a TOML resource embedded next to the sources and is
//! parsed exactly once, when the tray is constructed. Handlers are wired by
//! item id, never by naming convention.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Embedded menu layout resource.
const MENU_RESOURCE: &str = include_str!("../resources/menu.toml");

/// Item id of the play/pause toggle entry.
pub const PLAY_PAUSE_ID: &str = "play_pause_toggle";
/// Item id of the now-playing entry.
pub const NOW_PLAYING_ID: &str = "now_playing";
/// Item id of the next-noise entry.
pub const NEXT_ID: &str = "next";
/// Item id of the previous-noise entry.
pub const PREVIOUS_ID: &str = "previous";
/// Item id of the preferences entry.
pub const PREFERENCES_ID: &str = "preferences";
/// Item id of the about entry.
pub const ABOUT_ID: &str = "about";
/// Item id of the quit entry.
pub const QUIT_ID: &str = "quit";

/// Parsed menu layout.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuSpec {
    items: Vec<MenuItemSpec>,
}

/// One entry of the menu layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum MenuItemSpec {
    /// Plain activatable entry.
    #[serde(rename = "action")]
    Action {
        /// Activation id, matched against the handler table.
        id: String,
        /// Initial label.
        label: String,
        /// Whether the entry starts enabled.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// Activatable entry with an image slot.
    #[serde(rename = "icon-action")]
    IconAction {
        /// Activation id, matched against the handler table.
        id: String,
        /// Initial label.
        label: String,
        /// Whether the entry starts enabled.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// Visual separator.
    #[serde(rename = "separator")]
    Separator,
}

fn default_enabled() -> bool {
    true
}

impl MenuSpec {
    /// Parse the embedded layout resource.
    #[track_caller]
    pub fn load() -> AppResult<Self> {
        toml::from_str(MENU_RESOURCE).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse menu resource: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Entries in declaration order.
    pub fn items(&self) -> &[MenuItemSpec] {
        &self.items
    }
}
