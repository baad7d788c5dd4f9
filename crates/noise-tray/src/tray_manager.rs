//! System tray icon and menu with state-based updates.
//!
//! Builds the menu from the declarative layout resource, resolves the
//! indicator icon pair once at startup, and applies the visual updates the
//! controller dispatches.

use crate::{
    AppError, AppResult, NowPlaying, VisualState,
    config::Config,
    menu_spec::{self, MenuItemSpec, MenuSpec},
};

use std::{collections::HashMap, fs, panic::Location};

use error_location::ErrorLocation;
use noise_tray_core::{
    DEFAULT_THEME, FALLBACK_ICONS, FALLBACK_THEME, IconRef, IconTheme, IndicatorIcons,
    NOW_PLAYING_FALLBACK_ICON, session_theme_name,
};
use tracing::{info, instrument, warn};
use tray_icon::menu::{Icon as MenuIcon, IconMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// Tray presence id.
const INDICATOR_ID: &str = "noise-tray-indicator";

/// Activation targets declared by the menu resource.
#[derive(Debug, Clone)]
pub struct MenuIds {
    pub(crate) play_pause: MenuId,
    pub(crate) next: MenuId,
    pub(crate) previous: MenuId,
    pub(crate) preferences: MenuId,
    pub(crate) about: MenuId,
    pub(crate) quit: MenuId,
}

impl MenuIds {
    fn from_map(ids: &HashMap<String, MenuId>) -> AppResult<Self> {
        Ok(Self {
            play_pause: Self::require(ids, menu_spec::PLAY_PAUSE_ID)?,
            next: Self::require(ids, menu_spec::NEXT_ID)?,
            previous: Self::require(ids, menu_spec::PREVIOUS_ID)?,
            preferences: Self::require(ids, menu_spec::PREFERENCES_ID)?,
            about: Self::require(ids, menu_spec::ABOUT_ID)?,
            quit: Self::require(ids, menu_spec::QUIT_ID)?,
        })
    }

    #[track_caller]
    fn require(ids: &HashMap<String, MenuId>, id: &str) -> AppResult<MenuId> {
        ids.get(id).cloned().ok_or_else(|| AppError::ConfigError {
            reason: format!("Menu resource is missing the '{}' item", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Tray icons decoded once at startup, immutable afterwards.
struct StateIcons {
    active: Icon,
    paused: Icon,
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    play_pause_item: IconMenuItem,
    now_playing_item: IconMenuItem,
    menu_ids: MenuIds,
    state_icons: StateIcons,
    menu_play_icon: MenuIcon,
    menu_pause_icon: MenuIcon,
}

impl TrayManager {
    /// Build the menu and the tray presence.
    ///
    /// The tray starts hidden and paused; the controller reveals it once
    /// the startup sequence has rendered a consistent state.
    #[track_caller]
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> AppResult<Self> {
        let layout = MenuSpec::load()?;

        let menu = Menu::new();
        let mut ids: HashMap<String, MenuId> = HashMap::new();
        let mut play_pause_item = None;
        let mut now_playing_item = None;

        for item in layout.items() {
            match item {
                MenuItemSpec::Separator => {
                    menu.append(&PredefinedMenuItem::separator())
                        .map_err(|e| AppError::Tray {
                            reason: format!("Failed to add separator: {}", e),
                            location: ErrorLocation::from(Location::caller()),
                        })?;
                }
                MenuItemSpec::Action { id, label, enabled } => {
                    let entry = MenuItem::new(label.as_str(), *enabled, None);
                    ids.insert(id.clone(), entry.id().clone());
                    menu.append(&entry).map_err(|e| AppError::Tray {
                        reason: format!("Failed to add '{}' menu item: {}", id, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                }
                MenuItemSpec::IconAction { id, label, enabled } => {
                    let entry = IconMenuItem::new(label.as_str(), *enabled, None, None);
                    ids.insert(id.clone(), entry.id().clone());
                    menu.append(&entry).map_err(|e| AppError::Tray {
                        reason: format!("Failed to add '{}' menu item: {}", id, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

                    match id.as_str() {
                        menu_spec::PLAY_PAUSE_ID => play_pause_item = Some(entry),
                        menu_spec::NOW_PLAYING_ID => now_playing_item = Some(entry),
                        _ => {}
                    }
                }
            }
        }

        let play_pause_item = play_pause_item.ok_or_else(|| AppError::ConfigError {
            reason: format!(
                "Menu resource is missing the '{}' icon item",
                menu_spec::PLAY_PAUSE_ID
            ),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let now_playing_item = now_playing_item.ok_or_else(|| AppError::ConfigError {
            reason: format!(
                "Menu resource is missing the '{}' icon item",
                menu_spec::NOW_PLAYING_ID
            ),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let menu_ids = MenuIds::from_map(&ids)?;

        let state_icons = Self::resolve_state_icons(config)?;

        let menu_play_icon = Self::menu_icon_from(&IconRef::Named(FALLBACK_ICONS[0].to_string()))?;
        let menu_pause_icon = Self::menu_icon_from(&IconRef::Named(FALLBACK_ICONS[1].to_string()))?;

        // Paused presentation before anything is visible.
        play_pause_item.set_icon(Some(menu_play_icon.clone()));

        let tray_icon = TrayIconBuilder::new()
            .with_id(INDICATOR_ID)
            .with_tooltip("Noise Tray - Paused")
            .with_menu(Box::new(menu))
            .with_icon(state_icons.paused.clone())
            .build()
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Hidden until the startup sequencer marks the indicator active.
        tray_icon.set_visible(false).map_err(|e| AppError::Tray {
            reason: format!("Failed to hide tray icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Tray indicator initialized (hidden)");

        Ok(Self {
            tray_icon,
            play_pause_item,
            now_playing_item,
            menu_ids,
            state_icons,
            menu_play_icon,
            menu_pause_icon,
        })
    }

    /// Render the play/pause entry, tray icon and tooltip for `state` as
    /// one unit.
    #[instrument(skip(self))]
    pub fn render_state(&mut self, state: VisualState) -> AppResult<()> {
        let (label, menu_icon, state_icon, tooltip) = match state {
            VisualState::Playing => (
                "Pause",
                &self.menu_pause_icon,
                &self.state_icons.active,
                "Noise Tray - Playing",
            ),
            VisualState::Paused => (
                "Play",
                &self.menu_play_icon,
                &self.state_icons.paused,
                "Noise Tray - Paused",
            ),
        };

        self.play_pause_item.set_text(label);
        self.play_pause_item.set_icon(Some(menu_icon.clone()));

        self.tray_icon
            .set_icon(Some(state_icon.clone()))
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to update tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Replace the now-playing label and artwork together.
    #[instrument(skip(self, now))]
    pub fn set_now_playing(&mut self, now: &NowPlaying) -> AppResult<()> {
        self.now_playing_item.set_text(now.label.as_str());

        // Unreadable artwork degrades to the generic fallback, never a
        // stale image.
        let icon = match Self::menu_icon_from(&now.icon) {
            Ok(icon) => icon,
            Err(e) => {
                warn!(error = ?e, "Noise artwork unusable, using fallback icon");
                Self::menu_icon_from(&IconRef::Named(NOW_PLAYING_FALLBACK_ICON.to_string()))?
            }
        };
        self.now_playing_item.set_icon(Some(icon));

        Ok(())
    }

    /// Reveal the indicator. Called once the startup sequence has settled.
    #[track_caller]
    pub fn set_active(&mut self) -> AppResult<()> {
        self.tray_icon.set_visible(true).map_err(|e| AppError::Tray {
            reason: format!("Failed to show tray icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Tray indicator visible");
        Ok(())
    }

    /// Activation targets for the controller's handler table.
    pub fn menu_ids(&self) -> MenuIds {
        self.menu_ids.clone()
    }

    /// Resolve and decode the indicator icon pair.
    ///
    /// Theme probing is all-or-nothing per theme; a themed pair that does
    /// not decode also degrades to the embedded generic pair.
    #[track_caller]
    fn resolve_state_icons(config: &Config) -> AppResult<StateIcons> {
        let theme_name = config
            .indicator
            .icon_theme
            .clone()
            .or_else(session_theme_name)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let themes = [IconTheme::named(&theme_name), IconTheme::named(FALLBACK_THEME)];
        let resolved = IndicatorIcons::resolve(&themes);

        match (
            Self::tray_icon_from(&resolved.active),
            Self::tray_icon_from(&resolved.paused),
        ) {
            (Ok(active), Ok(paused)) => Ok(StateIcons { active, paused }),
            _ => {
                warn!("Resolved indicator icons failed to decode, using generic pair");
                let builtin = IndicatorIcons::builtin();
                Ok(StateIcons {
                    active: Self::tray_icon_from(&builtin.active)?,
                    paused: Self::tray_icon_from(&builtin.paused)?,
                })
            }
        }
    }

    /// Decode an icon reference into a tray icon.
    #[track_caller]
    fn tray_icon_from(icon: &IconRef) -> AppResult<Icon> {
        let (rgba, width, height) = Self::load_rgba(icon)?;
        Icon::from_rgba(rgba, width, height).map_err(|e| AppError::Tray {
            reason: format!("Failed to create tray icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Decode an icon reference into a menu-item icon.
    #[track_caller]
    fn menu_icon_from(icon: &IconRef) -> AppResult<MenuIcon> {
        let (rgba, width, height) = Self::load_rgba(icon)?;
        MenuIcon::from_rgba(rgba, width, height).map_err(|e| AppError::Tray {
            reason: format!("Failed to create menu icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Load raw RGBA pixels for an icon reference.
    #[track_caller]
    fn load_rgba(icon: &IconRef) -> AppResult<(Vec<u8>, u32, u32)> {
        let bytes = match icon {
            IconRef::File(path) => fs::read(path).map_err(|e| AppError::Tray {
                reason: format!("Failed to read icon {:?}: {}", path, e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            IconRef::Named(name) => Self::builtin_icon_bytes(name)
                .ok_or_else(|| AppError::Tray {
                    reason: format!("No built-in resource for icon '{}'", name),
                    location: ErrorLocation::from(Location::caller()),
                })?
                .to_vec(),
        };

        let img = image::load_from_memory(&bytes).map_err(|e| AppError::Tray {
            reason: format!("Failed to decode icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Ok((rgba.into_raw(), width, height))
    }

    /// Resources embedded via include_bytes! so the generic fallbacks work
    /// regardless of install location.
    fn builtin_icon_bytes(name: &str) -> Option<&'static [u8]> {
        if name == FALLBACK_ICONS[0] {
            Some(include_bytes!(
                "../resources/icons/media-playback-start-symbolic.png"
            ))
        } else if name == FALLBACK_ICONS[1] {
            Some(include_bytes!(
                "../resources/icons/media-playback-pause-symbolic.png"
            ))
        } else if name == NOW_PLAYING_FALLBACK_ICON {
            Some(include_bytes!(
                "../resources/icons/audio-card-symbolic.png"
            ))
        } else {
            None
        }
    }
}
