use crate::config::default_homepage_url;

use serde::{Deserialize, Serialize};

/// Tray indicator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Icon theme probed before the hicolor fallback. Defaults to the
    /// session's GTK icon theme when unset.
    #[serde(default)]
    pub icon_theme: Option<String>,
    /// Opened in the default browser by the About menu entry.
    #[serde(default = "default_homepage_url")]
    pub homepage_url: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            icon_theme: None,
            homepage_url: default_homepage_url(),
        }
    }
}
